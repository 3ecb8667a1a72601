use crate::app::{App, AppEvent, AppMode, RenderState};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{
    render_command_deck, render_inspector, render_options, render_progress_bar, render_summary,
    render_text_picker, render_token_stream, status_line,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const INSPECTOR_WIDTH: u16 = 44;

/// Translate a key press into an app event for the current mode.
pub fn map_key(mode: AppMode, key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Select => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrev,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,
            KeyCode::Enter => AppEvent::OpenSelected,
            KeyCode::Char(':') => AppEvent::EnterCommand,
            KeyCode::Char('?') => AppEvent::Help,
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Back,
            _ => AppEvent::None,
        },
        AppMode::Guessing => match key.code {
            KeyCode::Char(c) => AppEvent::Type(c),
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Up => AppEvent::SuggestionPrev,
            KeyCode::Down => AppEvent::SuggestionNext,
            KeyCode::Enter => AppEvent::Accept,
            KeyCode::Tab => AppEvent::Skip,
            KeyCode::F(2) => AppEvent::ToggleHardcore,
            KeyCode::Left => AppEvent::InspectPrev,
            KeyCode::Right => AppEvent::InspectNext,
            KeyCode::Esc => AppEvent::Back,
            _ => AppEvent::None,
        },
        AppMode::Completed => match key.code {
            KeyCode::Left => AppEvent::InspectPrev,
            KeyCode::Right => AppEvent::InspectNext,
            KeyCode::Enter => AppEvent::Accept,
            KeyCode::Char(':') => AppEvent::EnterCommand,
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Back,
            _ => AppEvent::None,
        },
        AppMode::Command => match key.code {
            KeyCode::Char(c) => AppEvent::Type(c),
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Enter => AppEvent::SubmitCommand,
            KeyCode::Esc => AppEvent::Back,
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    // Ignore release/repeat events reported on some platforms
                    if key.kind == KeyEventKind::Press {
                        app.handle_event(map_key(app.mode(), key));
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();
        self.terminal.draw(|frame| draw(frame, &state))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, state: &RenderState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let main = match &state.inspector {
        Some(view) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(20), Constraint::Length(INSPECTOR_WIDTH)])
                .split(rows[0]);
            frame.render_widget(render_inspector(view), cols[1]);
            cols[0]
        }
        None => rows[0],
    };

    if state.text_id.is_some() && state.screen != AppMode::Select {
        draw_game(frame, main, state);
        let status_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(22)])
            .split(rows[1]);
        frame.render_widget(Paragraph::new(status_line(state)), status_cols[0]);
        frame.render_widget(
            Paragraph::new(render_progress_bar(state.progress)),
            status_cols[1],
        );
    } else {
        frame.render_widget(render_text_picker(state), main);
    }

    render_command_deck(frame, rows[2], state);
}

fn draw_game(frame: &mut Frame, area: Rect, state: &RenderState) {
    let lower = if state.screen == AppMode::Completed {
        Constraint::Length(6)
    } else {
        Constraint::Length(state.options.len().clamp(1, 9) as u16 + 2)
    };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), lower])
        .split(area);

    frame.render_widget(render_token_stream(state), parts[0]);
    if state.screen == AppMode::Completed {
        frame.render_widget(render_summary(state), parts[1]);
    } else {
        frame.render_widget(render_options(state), parts[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(AppMode::Guessing, key), AppEvent::Quit);
        assert_eq!(map_key(AppMode::Command, key), AppEvent::Quit);
    }

    #[test]
    fn test_guessing_keys() {
        assert_eq!(
            map_key(AppMode::Guessing, press(KeyCode::Char('q'))),
            AppEvent::Type('q')
        );
        assert_eq!(map_key(AppMode::Guessing, press(KeyCode::Tab)), AppEvent::Skip);
        assert_eq!(
            map_key(AppMode::Guessing, press(KeyCode::F(2))),
            AppEvent::ToggleHardcore
        );
        assert_eq!(map_key(AppMode::Guessing, press(KeyCode::Enter)), AppEvent::Accept);
    }

    #[test]
    fn test_select_keys() {
        assert_eq!(map_key(AppMode::Select, press(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(
            map_key(AppMode::Select, press(KeyCode::Enter)),
            AppEvent::OpenSelected
        );
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(
            map_key(AppMode::Command, press(KeyCode::Enter)),
            AppEvent::SubmitCommand
        );
        assert_eq!(
            map_key(AppMode::Command, press(KeyCode::Char(':'))),
            AppEvent::Type(':')
        );
    }
}
