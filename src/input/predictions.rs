use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use super::{read_json, LoadError};

/// One predicted token and its probability in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionItem {
    pub token: String,
    pub probability: f64,
}

/// A single model's ranked predictions at one step.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrediction {
    pub model: String,
    pub items: Vec<PredictionItem>,
}

/// All models' predictions for one position of the text, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepPredictions {
    pub models: Vec<ModelPrediction>,
}

impl StepPredictions {
    /// The first model listed is the one casual mode draws choices from.
    pub fn primary(&self) -> Option<&ModelPrediction> {
        self.models.first()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Load `<id>_predictions.json`: an array indexed by step, each entry an
/// object mapping model name to a ranked list of `{token, probability}`.
pub fn load_predictions(path: &Path) -> Result<Vec<StepPredictions>, LoadError> {
    let raw: Vec<Map<String, Value>> = read_json(path)?;

    raw.into_iter()
        .enumerate()
        .map(|(step, models)| -> Result<StepPredictions, LoadError> {
            let models = models
                .into_iter()
                .map(|(model, value)| -> Result<ModelPrediction, LoadError> {
                    let items: Vec<PredictionItem> =
                        serde_json::from_value(value).map_err(|e| LoadError::InvalidPredictions {
                            path: path.to_path_buf(),
                            reason: format!("step {step}, model {model}: {e}"),
                        })?;
                    Ok(ModelPrediction { model, items })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(StepPredictions { models })
        })
        .collect()
}
