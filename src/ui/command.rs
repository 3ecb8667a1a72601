//! Command parsing for the TUI command deck
//!
//! Parses what the player types after pressing Esc:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:s` or `:skip` → Skip the current token
//! - `:m` or `:mode` → Toggle hardcore / casual mode
//! - `:t` or `:texts` → Back to the text picker
//! - `@id` → Open the text with that id

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Skip,
    ToggleMode,
    Texts,
    Open(String),
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "s" | "skip" => Command::Skip,
            "m" | "mode" => Command::ToggleMode,
            "t" | "texts" => Command::Texts,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let id = rest.trim();
        if id.is_empty() {
            Command::Unknown(input.to_string())
        } else {
            Command::Open(id.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Skip => AppEvent::Skip,
        Command::ToggleMode => AppEvent::ToggleHardcore,
        Command::Texts => AppEvent::ShowTexts,
        Command::Open(id) => AppEvent::OpenText(id),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
