use super::predictions::{load_predictions, StepPredictions};
use super::text::{list_texts, load_text, TextData, TextPreview};
use super::vocab::Vocabulary;
use super::LoadError;
use crate::engine::config::AssetConfig;

/// Number of leading tokens shown in the text picker.
pub const PREVIEW_TOKENS: usize = 10;

/// A loaded text together with its per-step model predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub text: TextData,
    pub predictions: Vec<StepPredictions>,
}

impl Session {
    pub fn predictions_at(&self, step: usize) -> Option<&StepPredictions> {
        self.predictions.get(step).filter(|p| !p.is_empty())
    }
}

/// Everything read from the assets directory at startup.
#[derive(Debug, Clone)]
pub struct AssetStore {
    config: AssetConfig,
    vocabulary: Vocabulary,
    texts: Vec<TextPreview>,
}

impl AssetStore {
    pub fn open(config: AssetConfig, marker: &str) -> Result<Self, LoadError> {
        let vocabulary = Vocabulary::load(&config.vocabulary_path())?;
        let texts = list_texts(&config.texts_path(), marker, PREVIEW_TOKENS)?;
        Ok(Self {
            config,
            vocabulary,
            texts,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn texts(&self) -> &[TextPreview] {
        &self.texts
    }

    /// Load a text and its predictions. A missing predictions file only
    /// disables casual mode and the inspector, it does not fail the load.
    pub fn load_session(&self, id: &str) -> Result<Session, LoadError> {
        if !self.texts.iter().any(|t| t.id == id) {
            return Err(LoadError::UnknownText(id.to_string()));
        }

        let text = load_text(&self.config.text_path(id))?;
        let predictions = match load_predictions(&self.config.predictions_path(id)) {
            Ok(predictions) => predictions,
            Err(LoadError::FileNotFound(path)) => {
                log::warn!("No predictions for {}: {} missing", id, path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        log::info!(
            "Loaded text {} ({} tokens, {} prediction steps)",
            id,
            text.sequence.len(),
            predictions.len()
        );
        Ok(Session {
            id: id.to_string(),
            text,
            predictions,
        })
    }
}
