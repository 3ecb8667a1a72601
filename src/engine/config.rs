// Configuration for the guessing game and its asset layout.
// Defaults mirror the bundled Llama-3 assets.

use std::path::PathBuf;

use super::ranker::DEFAULT_SUGGESTION_LIMIT;

/// Word-boundary marker used by byte-level BPE vocabularies.
pub const DEFAULT_MARKER: &str = "Ġ";

/// Game rules and presentation knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Leading marker on tokens that start a new word (default "Ġ")
    pub marker: String,

    /// Maximum vocabulary suggestions shown while typing (default 7)
    pub suggestion_limit: usize,

    /// Tokens revealed up front as the prompt (default 10)
    pub prompt_tokens: usize,

    /// Model predictions offered in casual mode (default 5)
    pub model_choices: usize,

    /// Free typing with fuzzy suggestions instead of multiple choice
    pub hardcore: bool,

    /// Added to the step number to seed the choice shuffle
    pub choice_seed_base: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            prompt_tokens: 10,
            model_choices: 5,
            hardcore: true,
            choice_seed_base: 0,
        }
    }
}

/// Where texts, predictions and the vocabulary live on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub texts_dir: String,
    pub predictions_dir: String,
    pub vocabulary_file: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            texts_dir: "texts".to_string(),
            predictions_dir: "predictions".to_string(),
            vocabulary_file: PathBuf::from("tokens.json"),
        }
    }
}

impl AssetConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn texts_path(&self) -> PathBuf {
        self.root.join(&self.texts_dir)
    }

    pub fn text_path(&self, id: &str) -> PathBuf {
        self.texts_path().join(format!("{id}.json"))
    }

    pub fn predictions_path(&self, id: &str) -> PathBuf {
        self.root
            .join(&self.predictions_dir)
            .join(format!("{id}_predictions.json"))
    }

    /// Absolute vocabulary paths are used as-is, relative ones sit under `root`.
    pub fn vocabulary_path(&self) -> PathBuf {
        if self.vocabulary_file.is_absolute() {
            self.vocabulary_file.clone()
        } else {
            self.root.join(&self.vocabulary_file)
        }
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub game: GameConfig,
    pub assets: AssetConfig,
}
