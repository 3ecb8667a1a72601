use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{read_json, LoadError};
use crate::engine::display_token;

/// A pre-tokenized text, stored as `{"sequence": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextData {
    pub sequence: Vec<String>,
}

/// Entry in the text picker.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPreview {
    pub id: String,
    pub preview: String,
}

impl TextPreview {
    pub fn from_sequence(id: &str, sequence: &[String], marker: &str, len: usize) -> Self {
        let preview = sequence
            .iter()
            .take(len)
            .map(|token| display_token(token, marker))
            .collect::<String>();
        Self {
            id: id.to_string(),
            preview,
        }
    }
}

pub fn load_text(path: &Path) -> Result<TextData, LoadError> {
    let text: TextData = read_json(path)?;
    if text.sequence.is_empty() {
        return Err(LoadError::EmptySequence(path.display().to_string()));
    }
    Ok(text)
}

/// Preview every `*.json` text in `dir`, sorted by id.
///
/// Files that fail to parse are skipped with a warning so one bad text does
/// not hide the others.
pub fn list_texts(
    dir: &Path,
    marker: &str,
    preview_len: usize,
) -> Result<Vec<TextPreview>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut previews = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        match load_text(&path) {
            Ok(text) => previews.push(TextPreview::from_sequence(
                id,
                &text.sequence,
                marker,
                preview_len,
            )),
            Err(e) => log::warn!("Skipping text {}: {}", id, e),
        }
    }

    previews.sort_by(|a, b| a.id.cmp(&b.id));
    log::info!("Found {} texts in {}", previews.len(), dir.display());
    Ok(previews)
}
