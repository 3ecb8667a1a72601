use std::collections::HashSet;
use std::path::Path;

use super::{read_json, LoadError};

/// Ordered, de-duplicated list of every token the player can be offered.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Load a JSON array of token strings.
    ///
    /// Duplicates are dropped keeping the first occurrence, so the order the
    /// file lists tokens in is the order ties are broken in.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw: Vec<String> = read_json(path)?;
        let vocab = Self::from_tokens(raw);
        if vocab.is_empty() {
            return Err(LoadError::EmptyVocabulary(path.to_path_buf()));
        }
        log::info!("Loaded {} vocabulary tokens from {}", vocab.len(), path.display());
        Ok(vocab)
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        let mut duplicates = 0usize;
        for token in tokens {
            let token = token.into();
            if seen.insert(token.clone()) {
                unique.push(token);
            } else {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            log::warn!("Dropped {duplicates} duplicate vocabulary tokens");
        }
        Self { tokens: unique }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
