#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Picking a text to play.
    Select,
    /// Guessing the next token.
    Guessing,
    /// Text finished; the summary is shown.
    Completed,
    /// Typing into the command deck.
    Command,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Select => "SELECT",
            AppMode::Guessing => "GUESS",
            AppMode::Completed => "DONE",
            AppMode::Command => "COMMAND",
            AppMode::Quit => "QUIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_distinct() {
        let labels = [
            AppMode::Select.label(),
            AppMode::Guessing.label(),
            AppMode::Completed.label(),
            AppMode::Command.label(),
            AppMode::Quit.label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
