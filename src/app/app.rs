use unicode_segmentation::UnicodeSegmentation;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{InspectorView, RenderState};
use crate::engine::config::GameConfig;
use crate::engine::SuggestionRanker;
use crate::game::{model_choices, GameState, GuessResult};
use crate::input::{AssetStore, Session};
use crate::ui::command::{command_to_app_event, parse_command};

pub const HELP_TEXT: &str = "Type to search the vocabulary, ↑/↓ pick, Enter guess, Tab skip, \
F2 toggle mode, ←/→ inspect, Esc commands (:q :h :skip :mode :texts @id)";

pub struct App {
    mode: AppMode,
    /// Mode to return to when the command deck closes
    previous_mode: AppMode,
    config: GameConfig,
    store: AssetStore,
    ranker: SuggestionRanker,
    session: Option<Session>,
    game: Option<GameState>,
    text_cursor: usize,
    input: String,
    suggestions: Vec<String>,
    highlighted: usize,
    hardcore: bool,
    inspected: Option<usize>,
    command_buffer: String,
    status: Option<String>,
    last_guess: Option<GuessResult>,
}

impl App {
    pub fn new(config: GameConfig, store: AssetStore) -> Self {
        let ranker = SuggestionRanker::new(
            store.vocabulary().tokens().to_vec(),
            &config.marker,
            config.suggestion_limit,
        );
        Self {
            mode: AppMode::Select,
            previous_mode: AppMode::Select,
            hardcore: config.hardcore,
            config,
            store,
            ranker,
            session: None,
            game: None,
            text_cursor: 0,
            input: String::new(),
            suggestions: Vec::new(),
            highlighted: 0,
            inspected: None,
            command_buffer: String::new(),
            status: None,
            last_guess: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_hardcore(&self) -> bool {
        self.hardcore
    }

    pub fn last_guess(&self) -> Option<&GuessResult> {
        self.last_guess.as_ref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(HELP_TEXT.to_string()),
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {input}"));
            }
            AppEvent::OpenText(id) => self.open_text(&id),
            AppEvent::ShowTexts => self.show_texts(),
            AppEvent::EnterCommand => self.enter_command(),
            AppEvent::None => {}
            event => match self.mode {
                AppMode::Select => self.handle_select(event),
                AppMode::Guessing => self.handle_guessing(event),
                AppMode::Completed => self.handle_completed(event),
                AppMode::Command => self.handle_command(event),
                AppMode::Quit => {}
            },
        }
    }

    fn handle_select(&mut self, event: AppEvent) {
        let count = self.store.texts().len();
        match event {
            AppEvent::SelectNext if count > 0 => {
                self.text_cursor = (self.text_cursor + 1) % count;
            }
            AppEvent::SelectPrev if count > 0 => {
                self.text_cursor = (self.text_cursor + count - 1) % count;
            }
            AppEvent::OpenSelected => {
                if let Some(id) = self.store.texts().get(self.text_cursor).map(|t| t.id.clone()) {
                    self.open_text(&id);
                }
            }
            AppEvent::Back => self.mode = AppMode::Quit,
            _ => {}
        }
    }

    fn handle_guessing(&mut self, event: AppEvent) {
        match event {
            AppEvent::Type(c) => self.type_char(c),
            AppEvent::Backspace => self.backspace(),
            AppEvent::SuggestionNext => self.move_highlight(1),
            AppEvent::SuggestionPrev => self.move_highlight(-1),
            AppEvent::Accept => self.accept(),
            AppEvent::Skip => self.skip(),
            AppEvent::ToggleHardcore => self.toggle_hardcore(),
            AppEvent::InspectPrev => self.inspect_prev(),
            AppEvent::InspectNext => self.inspect_next(),
            AppEvent::Back => {
                if self.inspected.is_some() {
                    self.inspected = None;
                } else {
                    self.enter_command();
                }
            }
            _ => {}
        }
    }

    fn handle_completed(&mut self, event: AppEvent) {
        match event {
            AppEvent::InspectPrev => self.inspect_prev(),
            AppEvent::InspectNext => self.inspect_next(),
            AppEvent::Accept => self.show_texts(),
            AppEvent::Back => {
                if self.inspected.is_some() {
                    self.inspected = None;
                } else {
                    self.show_texts();
                }
            }
            _ => {}
        }
    }

    fn handle_command(&mut self, event: AppEvent) {
        match event {
            AppEvent::Type(c) => self.command_buffer.push(c),
            AppEvent::Backspace => {
                self.command_buffer.pop();
            }
            AppEvent::SubmitCommand | AppEvent::Accept => {
                let line = std::mem::take(&mut self.command_buffer);
                self.mode = self.previous_mode;
                let event = command_to_app_event(parse_command(&line));
                log::debug!("Command {:?} -> {:?}", line, event);
                self.handle_event(event);
            }
            AppEvent::Back => {
                self.command_buffer.clear();
                self.mode = self.previous_mode;
            }
            _ => {}
        }
    }

    fn enter_command(&mut self) {
        if self.mode != AppMode::Command && self.mode != AppMode::Quit {
            self.previous_mode = self.mode;
            self.mode = AppMode::Command;
            self.command_buffer.clear();
        }
    }

    fn show_texts(&mut self) {
        self.mode = AppMode::Select;
        self.inspected = None;
        self.clear_input();
    }

    pub fn open_text(&mut self, id: &str) {
        match self.store.load_session(id) {
            Ok(session) => {
                let game = GameState::new(session.text.sequence.clone(), self.config.prompt_tokens);
                if let Some(pos) = self.store.texts().iter().position(|t| t.id == id) {
                    self.text_cursor = pos;
                }
                self.mode = if game.is_completed() {
                    AppMode::Completed
                } else {
                    AppMode::Guessing
                };
                self.session = Some(session);
                self.game = Some(game);
                self.inspected = None;
                self.last_guess = None;
                self.status = None;
                self.clear_input();
                log::info!("Started text {}", id);
            }
            Err(e) => {
                log::warn!("Could not open text {}: {}", id, e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn type_char(&mut self, c: char) {
        if !self.hardcore {
            return;
        }
        // A leading space stands for the word-boundary marker.
        if c == ' ' && self.input.is_empty() && !self.config.marker.is_empty() {
            self.input.push_str(&self.config.marker);
        } else {
            self.input.push(c);
        }
        self.refresh_suggestions();
    }

    fn backspace(&mut self) {
        if let Some((idx, _)) = self.input.grapheme_indices(true).next_back() {
            self.input.truncate(idx);
            self.refresh_suggestions();
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = self.ranker.rank(&self.input);
        self.highlighted = 0;
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.highlighted = 0;
    }

    /// Options currently on offer: suggestions or model choices.
    pub fn options(&self) -> Vec<String> {
        if self.hardcore {
            self.suggestions.clone()
        } else {
            self.current_choices()
        }
    }

    fn current_choices(&self) -> Vec<String> {
        let (Some(session), Some(game)) = (&self.session, &self.game) else {
            return Vec::new();
        };
        let Some(target) = game.current_target() else {
            return Vec::new();
        };
        let step = game.step();
        model_choices(
            session.predictions_at(step),
            target,
            self.config.model_choices,
            step as u64 + self.config.choice_seed_base,
        )
    }

    fn move_highlight(&mut self, delta: isize) {
        let count = self.options().len();
        if count == 0 {
            return;
        }
        let current = self.highlighted.min(count - 1) as isize;
        self.highlighted = (current + delta).rem_euclid(count as isize) as usize;
    }

    fn accept(&mut self) {
        let options = self.options();
        let Some(token) = options.get(self.highlighted).cloned() else {
            return;
        };
        self.submit_guess(&token);
    }

    /// Guess `token` for the current position.
    pub fn submit_guess(&mut self, token: &str) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let Some(result) = game.guess(token) else {
            return;
        };
        log::debug!(
            "Guess {:?} at step {}: {}",
            token,
            game.step() - 1,
            if result.correct { "correct" } else { "wrong" }
        );
        self.status = Some(if result.correct {
            format!("Correct: {token}")
        } else {
            format!("Wrong: {token}, it was {}", result.expected)
        });
        self.last_guess = Some(result);
        self.after_step();
    }

    fn skip(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.skip() {
            log::debug!("Skipped step {}", game.step() - 1);
            self.status = None;
            self.after_step();
        }
    }

    fn after_step(&mut self) {
        self.clear_input();
        if self.game.as_ref().is_some_and(GameState::is_completed) {
            self.mode = AppMode::Completed;
            if let Some(game) = &self.game {
                log::info!(
                    "Finished with {:.1}% accuracy, {} skipped",
                    game.accuracy(),
                    game.skip_count()
                );
            }
        }
    }

    fn toggle_hardcore(&mut self) {
        self.hardcore = !self.hardcore;
        self.clear_input();
    }

    fn revealed_len(&self) -> usize {
        self.game.as_ref().map_or(0, |g| g.displayed().len())
    }

    fn inspect_prev(&mut self) {
        let len = self.revealed_len();
        if len == 0 {
            return;
        }
        self.inspected = Some(match self.inspected {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        });
    }

    fn inspect_next(&mut self) {
        let len = self.revealed_len();
        self.inspected = match self.inspected {
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => None,
            None => None,
        };
    }

    fn inspector(&self) -> Option<InspectorView> {
        let index = self.inspected?;
        let session = self.session.as_ref()?;
        let game = self.game.as_ref()?;
        let models = session
            .predictions_at(index)
            .map(|p| p.models.clone())
            .unwrap_or_default();
        Some(InspectorView {
            index,
            context: game.context_before(index, &self.config.marker),
            models,
        })
    }

    pub fn render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode, &self.config.marker);
        if self.mode == AppMode::Command {
            state.screen = self.previous_mode;
        }
        state.texts = self.store.texts().to_vec();
        state.text_cursor = self.text_cursor;
        state.hardcore = self.hardcore;
        state.command_buffer = self.command_buffer.clone();
        state.status = self.status.clone();

        if let (Some(session), Some(game)) = (&self.session, &self.game) {
            state.text_id = Some(session.id.clone());
            state.tokens = game.displayed().to_vec();
            state.input = self.input.clone();
            state.options = self.options();
            state.highlighted = self.highlighted;
            state.progress = game.progress();
            state.accuracy = game.accuracy();
            state.score = game.score();
            state.skip_count = game.skip_count();
            state.inspected = self.inspected;
            state.inspector = self.inspector();
        }
        state
    }
}
