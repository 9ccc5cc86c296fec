//! Error types for study-core.
//!
//! The transcript parsers never fail: malformed entries are skipped and an
//! empty transcript yields an empty list. These errors only cover typed
//! conversions at the edges (option letters, diagram mode names).

use thiserror::Error;

/// Result type alias using StudyError.
pub type Result<T> = std::result::Result<T, StudyError>;

/// Errors raised when converting loosely typed input into core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudyError {
    #[error("invalid option letter {0:?}, expected one of A, B, C, D")]
    InvalidLetter(String),

    #[error("unknown diagram mode {0:?}")]
    UnknownDiagramMode(String),
}
