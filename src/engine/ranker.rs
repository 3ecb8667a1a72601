//! Fuzzy vocabulary suggestions for the player's typed guess.
//!
//! Candidates are ordered by `(exact match first, edit distance)`. Exactness
//! compares raw strings while the distance compares normalized, lowercased
//! forms, so `Ġcat` against input `cat` has distance 0 but is not "exact".
//! Equal keys keep vocabulary order.

use super::distance::edit_distance;
use super::normalize::normalize_token;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 7;

/// One scored candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub token: String,
    pub distance: usize,
    pub is_exact_match: bool,
}

impl Suggestion {
    fn sort_key(&self) -> (u8, usize) {
        (u8::from(!self.is_exact_match), self.distance)
    }
}

fn comparison_form(token: &str, marker: &str) -> String {
    normalize_token(token, marker).to_lowercase()
}

/// Score every candidate in vocabulary order. Empty input yields nothing.
pub fn score_candidates<S: AsRef<str>>(
    input: &str,
    vocabulary: &[S],
    marker: &str,
) -> Vec<Suggestion> {
    if input.is_empty() {
        return Vec::new();
    }

    let needle = comparison_form(input, marker);
    vocabulary
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            Suggestion {
                token: candidate.to_string(),
                distance: edit_distance(&needle, &comparison_form(candidate, marker)),
                is_exact_match: candidate == input,
            }
        })
        .collect()
}

/// Up to `limit` best vocabulary tokens for `input`.
pub fn rank_suggestions<S: AsRef<str>>(
    input: &str,
    vocabulary: &[S],
    marker: &str,
    limit: usize,
) -> Vec<String> {
    let mut scored = score_candidates(input, vocabulary, marker);
    // sort_by_key is stable: ties keep vocabulary order
    scored.sort_by_key(Suggestion::sort_key);
    scored.into_iter().take(limit).map(|s| s.token).collect()
}

/// A ranker bound to one vocabulary.
///
/// Each token's comparison form is computed once up front; per keystroke only
/// the input is normalized. Output is identical to [`rank_suggestions`].
#[derive(Debug, Clone)]
pub struct SuggestionRanker {
    tokens: Vec<String>,
    forms: Vec<String>,
    marker: String,
    limit: usize,
}

impl SuggestionRanker {
    pub fn new(tokens: Vec<String>, marker: &str, limit: usize) -> Self {
        let forms = tokens.iter().map(|t| comparison_form(t, marker)).collect();
        Self {
            tokens,
            forms,
            marker: marker.to_string(),
            limit,
        }
    }

    pub fn rank(&self, input: &str) -> Vec<String> {
        self.rank_with_limit(input, self.limit)
    }

    pub fn rank_with_limit(&self, input: &str, limit: usize) -> Vec<String> {
        if input.is_empty() || self.tokens.is_empty() || limit == 0 {
            return Vec::new();
        }

        let needle = comparison_form(input, &self.marker);
        let mut scored: Vec<(u8, usize, usize)> = self
            .tokens
            .iter()
            .zip(&self.forms)
            .enumerate()
            .map(|(idx, (token, form))| {
                let exact = u8::from(token.as_str() != input);
                (exact, edit_distance(&needle, form), idx)
            })
            .collect();
        scored.sort_unstable();

        scored
            .into_iter()
            .take(limit)
            .map(|(_, _, idx)| self.tokens[idx].clone())
            .collect()
    }
}
