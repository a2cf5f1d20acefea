//! Library error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes are not UTF-8 text.
    #[error("input is not valid UTF-8 text (valid up to byte {valid_up_to})")]
    NotText { valid_up_to: usize },

    /// An explicitly requested config file could not be used.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A length limit that cannot be enforced.
    #[error("invalid limit '{0}': expected a positive whole number")]
    InvalidLimit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
