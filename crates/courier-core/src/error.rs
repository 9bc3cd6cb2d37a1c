//! Core error type.
//!
//! Downstream crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Prefer whichever
//! keeps error sites clean.

use thiserror::Error;

/// Errors produced by `courier-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate text {0:?}")]
    InvalidCoordinate(String),
}

/// Shorthand result type for `courier-core`.
pub type CoreResult<T> = Result<T, CoreError>;
