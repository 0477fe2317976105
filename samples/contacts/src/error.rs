//! Errors surfaced by the contacts command loop.

use std::io;

use thiserror::Error;

/// Failures while driving the menu.
#[derive(Debug, Error)]
pub enum ContactsError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The menu selection was not one of the listed numbers.
    #[error("invalid menu choice: {0:?}")]
    InvalidChoice(String),
    /// Input ended while a prompt was waiting for an answer.
    #[error("input ended unexpectedly")]
    EndOfInput,
}
