use super::token::{DisplayedToken, Outcome};
use crate::engine::display_token;

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub correct: bool,
    pub expected: String,
}

/// Progress through one text.
///
/// The first `prompt_len` tokens are revealed up front; every later token is
/// either guessed or skipped, in order. `step` is the index of the token the
/// player is currently guessing and equals the sequence length once the game
/// is over.
#[derive(Debug, Clone)]
pub struct GameState {
    sequence: Vec<String>,
    displayed: Vec<DisplayedToken>,
    prompt_len: usize,
    step: usize,
    score: usize,
    skip_count: usize,
}

impl GameState {
    pub fn new(sequence: Vec<String>, prompt_tokens: usize) -> Self {
        let prompt_len = prompt_tokens.min(sequence.len());
        let displayed = sequence[..prompt_len]
            .iter()
            .map(|t| DisplayedToken::prompt(t))
            .collect();
        Self {
            sequence,
            displayed,
            prompt_len,
            step: prompt_len,
            score: 0,
            skip_count: 0,
        }
    }

    pub fn displayed(&self) -> &[DisplayedToken] {
        &self.displayed
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn skip_count(&self) -> usize {
        self.skip_count
    }

    pub fn is_completed(&self) -> bool {
        self.step >= self.sequence.len()
    }

    /// The token the player should guess next.
    pub fn current_target(&self) -> Option<&str> {
        self.sequence.get(self.step).map(String::as_str)
    }

    /// Submit a guess for the current token. `None` once the game is over.
    pub fn guess(&mut self, token: &str) -> Option<GuessResult> {
        let expected = self.current_target()?.to_string();
        let correct = token == expected;
        let outcome = if correct {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Wrong(token.to_string())
        };
        self.reveal(outcome);
        Some(GuessResult { correct, expected })
    }

    /// Reveal the current token without guessing. Returns `false` once the
    /// game is over.
    pub fn skip(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.skip_count += 1;
        self.reveal(Outcome::Skipped);
        true
    }

    fn reveal(&mut self, outcome: Outcome) {
        self.displayed.push(DisplayedToken {
            text: self.sequence[self.step].clone(),
            outcome,
        });
        self.step += 1;
    }

    /// Guesses plus skips so far.
    pub fn attempts(&self) -> usize {
        self.step - self.prompt_len
    }

    /// Percentage of attempts guessed right; 0 before the first attempt.
    pub fn accuracy(&self) -> f64 {
        let attempts = self.attempts().max(1);
        self.score as f64 / attempts as f64 * 100.0
    }

    /// Revealed tokens out of the total.
    pub fn progress(&self) -> (usize, usize) {
        (self.step, self.sequence.len())
    }

    /// Readable text preceding `index`, used as the inspector heading.
    pub fn context_before(&self, index: usize, marker: &str) -> String {
        let end = index.min(self.sequence.len());
        self.sequence[..end]
            .iter()
            .map(|t| display_token(t, marker))
            .collect()
    }
}
