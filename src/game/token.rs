/// How a revealed token came to be on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Part of the prompt shown before play starts.
    Prompt,
    Correct,
    /// Guessed wrong; holds what the player picked.
    Wrong(String),
    Skipped,
}

/// A ground-truth token in the revealed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedToken {
    pub text: String,
    pub outcome: Outcome,
}

impl DisplayedToken {
    pub fn prompt(text: &str) -> Self {
        Self {
            text: text.to_string(),
            outcome: Outcome::Prompt,
        }
    }

    pub fn wrong_guess(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Wrong(guess) => Some(guess),
            _ => None,
        }
    }
}
