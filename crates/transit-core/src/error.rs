//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `transit-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid clock time {hour:02}:{minute:02}")]
    ClockOutOfRange { hour: u32, minute: u32 },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `transit-core`.
pub type CoreResult<T> = Result<T, CoreError>;
