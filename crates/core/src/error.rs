//! Centralized error types for the ratchet workspace.

use thiserror::Error;

/// Top-level error enum. Variants map to the failure taxonomy shared by
/// every extension module.
///
/// These cover programmer-error and collaborator conditions that abort the
/// current operation immediately. Expected domain-level failures travel as
/// [`crate::Outcome`] values instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RatchetError {
    /// A required input was absent or invalid (e.g. a non-positive step).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A search exhausted the sequence without a match.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A range bound was relative/from-end rather than a concrete integer.
    #[error("Unsupported range: {0}")]
    UnsupportedRange(String),

    /// A task helper deadline elapsed before the task completed.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RatchetResult<T> = Result<T, RatchetError>;
