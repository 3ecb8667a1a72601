use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::render_state::{InspectorView, RenderState};
use crate::app::AppMode;
use crate::engine::split_marker;
use crate::game::{DisplayedToken, Outcome};
use crate::input::TextPreview;
use crate::ui::theme::colors;

pub const TITLE: &str = " You are an LLM ";

const BAR_CELLS: usize = 12;
const TOKEN_COLUMN: usize = 14;

fn text_style() -> Style {
    Style::default().fg(colors::text()).bg(colors::background())
}

fn dim_style() -> Style {
    Style::default().fg(colors::dimmed())
}

/// Spans for one revealed token. A wrong guess precedes the true token,
/// struck through; the word-boundary marker is drawn dim.
pub fn token_spans(token: &DisplayedToken, marker: &str, selected: bool) -> Vec<Span<'static>> {
    let mut style = match &token.outcome {
        Outcome::Prompt => Style::default().fg(colors::text()),
        Outcome::Correct => Style::default().fg(colors::correct()),
        Outcome::Wrong(_) => Style::default().fg(colors::background()).bg(colors::wrong()),
        Outcome::Skipped => Style::default().fg(colors::skipped()),
    };
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = Vec::new();
    if let Outcome::Wrong(guess) = &token.outcome {
        let (_, visible) = split_marker(guess, marker);
        spans.push(Span::styled(
            visible.to_string(),
            dim_style().add_modifier(Modifier::CROSSED_OUT),
        ));
    }

    let (prefix, visible) = split_marker(&token.text, marker);
    if let Some(prefix) = prefix {
        spans.push(Span::styled(prefix.to_string(), dim_style()));
    }
    spans.push(Span::styled(visible.to_string(), style));
    spans
}

/// The revealed text followed by the player's input cursor.
pub fn render_token_stream(state: &RenderState) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (idx, token) in state.tokens.iter().enumerate() {
        spans.extend(token_spans(token, &state.marker, state.inspected == Some(idx)));
    }

    if state.screen == AppMode::Guessing {
        spans.push(Span::raw(" "));
        if state.hardcore {
            spans.push(Span::styled(
                format!("[{}▏]", state.input),
                Style::default().fg(colors::accent()),
            ));
        } else {
            spans.push(Span::styled("[?]", Style::default().fg(colors::accent())));
        }
    }

    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .style(text_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(dim_style())
                .title(TITLE),
        )
}

/// Suggestion or choice list with the highlighted entry marked.
pub fn option_lines(options: &[String], highlighted: usize) -> Vec<Line<'static>> {
    options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            if idx == highlighted {
                Line::from(Span::styled(
                    format!("▶ {option}"),
                    Style::default()
                        .fg(colors::accent())
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {option}"),
                    Style::default().fg(colors::text()),
                ))
            }
        })
        .collect()
}

pub fn render_options(state: &RenderState) -> Paragraph<'static> {
    let title = if state.hardcore {
        " Suggestions "
    } else {
        " Model predictions "
    };
    let lines = if state.options.is_empty() {
        let hint = if state.hardcore {
            "Start typing to search tokens"
        } else {
            "No predictions for this step, press Tab to skip"
        };
        vec![Line::from(Span::styled(hint, dim_style()))]
    } else {
        option_lines(&state.options, state.highlighted)
    };
    Paragraph::new(lines).style(text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(dim_style())
            .title(title),
    )
}

pub fn status_line(state: &RenderState) -> Line<'static> {
    let (current, total) = state.progress;
    let mut spans = vec![
        Span::styled(
            format!("Progress: {current} / {total}"),
            Style::default().fg(colors::text()),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Accuracy: {:.1}%", state.accuracy),
            Style::default().fg(colors::text()),
        ),
    ];
    if state.skip_count > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("Skipped: {}", state.skip_count), dim_style()));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        if state.hardcore { "[hardcore]" } else { "[casual]" },
        Style::default().fg(colors::accent()),
    ));
    Line::from(spans)
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current.min(total) * 20) / total
    };
    let empty_len = 20 - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::accent())),
        Span::styled("─".repeat(empty_len), dim_style()),
    ])
    .alignment(Alignment::Center)
}

pub fn text_list_lines(texts: &[TextPreview], cursor: usize) -> Vec<Line<'static>> {
    if texts.is_empty() {
        return vec![Line::from(Span::styled(
            "No texts found in the assets directory",
            dim_style(),
        ))];
    }
    texts
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let marker = if idx == cursor { "▶ " } else { "  " };
            let style = if idx == cursor {
                Style::default()
                    .fg(colors::accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::text())
            };
            Line::from(vec![
                Span::styled(format!("{marker}{}", text.preview.trim_start()), style),
                Span::styled(format!("  @{}", text.id), dim_style()),
            ])
        })
        .collect()
}

pub fn render_text_picker(state: &RenderState) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled("Pick a text to predict:", dim_style())),
        Line::default(),
    ];
    lines.extend(text_list_lines(&state.texts, state.text_cursor));
    Paragraph::new(lines).style(text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(dim_style())
            .title(TITLE),
    )
}

fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// One prediction row: token, probability bar and rounded percentage.
pub fn prediction_line(token: &str, probability: f64) -> Line<'static> {
    let p = probability.clamp(0.0, 1.0);
    let filled = (p * BAR_CELLS as f64).round() as usize;
    Line::from(vec![
        Span::styled(pad_to_width(token, TOKEN_COLUMN), Style::default().fg(colors::text())),
        Span::styled("█".repeat(filled), Style::default().fg(colors::accent())),
        Span::styled("░".repeat(BAR_CELLS - filled), dim_style()),
        Span::styled(format!(" {:>3.0}%", p * 100.0), Style::default().fg(colors::text())),
    ])
}

pub fn inspector_lines(view: &InspectorView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Predictions after:", dim_style())),
        Line::from(Span::styled(
            view.context.clone(),
            Style::default().fg(colors::text()).bg(colors::surface()),
        )),
        Line::default(),
    ];

    if view.models.is_empty() {
        lines.push(Line::from(Span::styled("No predictions recorded", dim_style())));
    }
    for model in &view.models {
        lines.push(Line::from(Span::styled(
            model.model.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in &model.items {
            lines.push(prediction_line(&item.token, item.probability));
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled("Esc to close", dim_style())));
    lines
}

pub fn render_inspector(view: &InspectorView) -> Paragraph<'static> {
    Paragraph::new(inspector_lines(view))
        .wrap(Wrap { trim: false })
        .style(text_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(dim_style())
                .title(format!(" Token #{} ", view.index)),
        )
}

pub fn summary_lines(state: &RenderState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Game over!",
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Final accuracy: {:.1}%", state.accuracy)),
    ];
    if state.skip_count > 0 {
        lines.push(Line::from(Span::styled(
            format!("Tokens skipped: {}", state.skip_count),
            dim_style(),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter for another text, ←/→ to inspect, :q to quit",
        dim_style(),
    )));
    lines
}

pub fn render_summary(state: &RenderState) -> Paragraph<'static> {
    Paragraph::new(summary_lines(state)).style(text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(dim_style()),
    )
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(colors::accent()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let text = if state.mode == AppMode::Command {
        format!(" {} {}▏", state.mode.label(), state.command_buffer)
    } else if let Some(status) = &state.status {
        format!(" {} {}", state.mode.label(), status)
    } else {
        format!(" {} Esc for commands, :h for help", state.mode.label())
    };

    let input_widget = Paragraph::new(text)
        .style(Style::default().fg(colors::text()).bg(colors::surface()));
    frame.render_widget(input_widget, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ModelPrediction, PredictionItem};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_token_spans_split_marker() {
        let token = DisplayedToken {
            text: "Ġcat".to_string(),
            outcome: Outcome::Correct,
        };
        let spans = token_spans(&token, "Ġ", false);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Ġ");
        assert_eq!(spans[1].content, "cat");
    }

    #[test]
    fn test_token_spans_wrong_guess_struck() {
        let token = DisplayedToken {
            text: "Ġsat".to_string(),
            outcome: Outcome::Wrong("Ġran".to_string()),
        };
        let spans = token_spans(&token, "Ġ", false);
        assert_eq!(spans[0].content, "ran");
        assert!(spans[0].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(spans.last().unwrap().content, "sat");
    }

    #[test]
    fn test_selected_token_reversed() {
        let token = DisplayedToken::prompt("word");
        let spans = token_spans(&token, "Ġ", true);
        assert!(spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_option_lines_highlight() {
        let options = vec!["Ġcat".to_string(), "Ġcar".to_string()];
        let lines = option_lines(&options, 1);
        assert_eq!(line_text(&lines[0]), "  Ġcat");
        assert_eq!(line_text(&lines[1]), "▶ Ġcar");
    }

    #[test]
    fn test_status_line_contents() {
        let mut state = RenderState::empty(AppMode::Guessing, "Ġ");
        state.progress = (12, 40);
        state.accuracy = 50.0;
        state.skip_count = 2;
        let text = line_text(&status_line(&state));
        assert!(text.contains("Progress: 12 / 40"));
        assert!(text.contains("Accuracy: 50.0%"));
        assert!(text.contains("Skipped: 2"));
        assert!(text.contains("[hardcore]"));
    }

    #[test]
    fn test_status_line_hides_zero_skips() {
        let state = RenderState::empty(AppMode::Guessing, "Ġ");
        assert!(!line_text(&status_line(&state)).contains("Skipped"));
    }

    #[test]
    fn test_render_progress_bar_bounds() {
        assert_eq!(line_text(&render_progress_bar((0, 0))).chars().count(), 20);
        assert_eq!(line_text(&render_progress_bar((50, 100))).chars().count(), 20);
        assert_eq!(line_text(&render_progress_bar((9, 3))).chars().count(), 20);
    }

    #[test]
    fn test_prediction_line_percentage() {
        let text = line_text(&prediction_line("Ġcat", 0.42));
        assert!(text.starts_with("Ġcat"));
        assert!(text.ends_with(" 42%"));
    }

    #[test]
    fn test_inspector_lines_list_models() {
        let view = InspectorView {
            index: 3,
            context: "The cat".to_string(),
            models: vec![ModelPrediction {
                model: "llama".to_string(),
                items: vec![PredictionItem {
                    token: "Ġsat".to_string(),
                    probability: 0.7,
                }],
            }],
        };
        let texts: Vec<String> = inspector_lines(&view).iter().map(line_text).collect();
        assert_eq!(texts[1], "The cat");
        assert!(texts.iter().any(|t| t == "llama"));
        assert!(texts.iter().any(|t| t.ends_with(" 70%")));
    }

    #[test]
    fn test_text_list_empty() {
        let lines = text_list_lines(&[], 0);
        assert!(line_text(&lines[0]).contains("No texts"));
    }

    #[test]
    fn test_summary_mentions_skips() {
        let mut state = RenderState::empty(AppMode::Completed, "Ġ");
        state.accuracy = 75.0;
        state.skip_count = 1;
        let texts: Vec<String> = summary_lines(&state).iter().map(line_text).collect();
        assert!(texts.iter().any(|t| t.contains("75.0%")));
        assert!(texts.iter().any(|t| t.contains("Tokens skipped: 1")));
    }
}
