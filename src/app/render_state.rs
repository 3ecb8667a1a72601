use crate::app::mode::AppMode;
use crate::game::DisplayedToken;
use crate::input::{ModelPrediction, TextPreview};

/// What the inspector panel shows for one revealed position.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub index: usize,
    /// Text preceding the inspected token, markers rendered as spaces
    pub context: String,
    pub models: Vec<ModelPrediction>,
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    /// Screen underneath the command deck; equals `mode` otherwise
    pub screen: AppMode,
    pub marker: String,
    pub texts: Vec<TextPreview>,
    pub text_cursor: usize,
    pub text_id: Option<String>,
    pub tokens: Vec<DisplayedToken>,
    pub input: String,
    /// Vocabulary suggestions in hardcore mode, model choices otherwise
    pub options: Vec<String>,
    pub highlighted: usize,
    pub hardcore: bool,
    pub progress: (usize, usize),
    pub accuracy: f64,
    pub score: usize,
    pub skip_count: usize,
    pub inspected: Option<usize>,
    pub inspector: Option<InspectorView>,
    pub command_buffer: String,
    pub status: Option<String>,
}

impl RenderState {
    /// Create an empty render state for when no text is loaded
    pub fn empty(mode: AppMode, marker: &str) -> Self {
        Self {
            mode,
            screen: mode,
            marker: marker.to_string(),
            texts: vec![],
            text_cursor: 0,
            text_id: None,
            tokens: vec![],
            input: String::new(),
            options: vec![],
            highlighted: 0,
            hardcore: true,
            progress: (0, 0),
            accuracy: 0.0,
            score: 0,
            skip_count: 0,
            inspected: None,
            inspector: None,
            command_buffer: String::new(),
            status: None,
        }
    }
}
