use std::io;
use thiserror::Error;

use crate::input::LoadError;

/// Top-level failure of a game run.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),
}
