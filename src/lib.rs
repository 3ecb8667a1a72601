//! Guess the next token of a text, the way a language model would.
//!
//! The ranking core lives in [`engine`] and has no terminal dependencies;
//! [`app`] and [`ui`] wrap it in a ratatui game.

pub mod app;
pub mod engine;
pub mod game;
pub mod input;
pub mod ui;
