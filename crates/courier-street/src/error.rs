//! Street-subsystem error type.

use thiserror::Error;

/// Errors produced by `courier-street`.
#[derive(Debug, Error)]
pub enum StreetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("map file line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub type StreetResult<T> = Result<T, StreetError>;
