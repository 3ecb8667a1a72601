//! Loading of game assets: texts, per-step model predictions and the
//! vocabulary used for suggestions.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod predictions;
pub mod store;
pub mod text;
pub mod vocab;

pub use predictions::{load_predictions, ModelPrediction, PredictionItem, StepPredictions};
pub use store::{AssetStore, Session};
pub use text::{list_texts, load_text, TextData, TextPreview};
pub use vocab::Vocabulary;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Vocabulary is empty: {}", .0.display())]
    EmptyVocabulary(PathBuf),

    #[error("Text has no tokens: {0}")]
    EmptySequence(String),

    #[error("Unknown text: {0}")]
    UnknownText(String),

    #[error("Invalid predictions in {}: {reason}", path.display())]
    InvalidPredictions { path: PathBuf, reason: String },
}

/// Read a whole file, mapping a missing file to [`LoadError::FileNotFound`].
pub(crate) fn read_asset(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a JSON asset.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = read_asset(path)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
