//! Two-variant result algebra for expected, domain-level failures.
//!
//! [`Outcome`] is the propagation mechanism for fallible operations whose
//! failure is an ordinary return value, not a fault in the caller's logic.
//! The hierarchy is rooted at the [`Fault`] capability: one required
//! attribute, a human-readable message.

use std::error::Error as StdError;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Fault hierarchy
// ---------------------------------------------------------------------------

/// Root capability of the error hierarchy.
///
/// Domain-specific error types implement this directly; [`Outcome`] only
/// requires that a stored error expose its message.
pub trait Fault {
    /// Human-readable description of what went wrong. Non-empty by contract.
    fn message(&self) -> &str;
}

/// Standard concrete fault: a message plus an optional causing error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StandardFault {
    message: String,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl StandardFault {
    /// Fault with a message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Fault wrapping the error that caused it.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The underlying cause, if one was attached.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl Fault for StandardFault {
    fn message(&self) -> &str {
        &self.message
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Holds exactly one of a success value or a fault.
///
/// A true sum type: the "neither value nor error" state is unrepresentable,
/// and no operation mutates an `Outcome` after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E: Fault> Outcome<T, E> {
    /// Successful outcome carrying `value`.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Failed outcome carrying `error`.
    pub fn failure(error: E) -> Self {
        debug_assert!(!error.message().is_empty(), "fault message must be non-empty");
        Outcome::Failure(error)
    }

    /// True iff a value is present (and therefore no error is).
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The success value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The fault, if present.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert into a `std::result::Result` for `?`-style propagation.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// A bare fault converts to a failed outcome.
///
/// The mirror conversion (bare value -> success) cannot coexist with this
/// one under coherence rules; use [`Outcome::success`] for the value path.
impl<T, E: Fault> From<E> for Outcome<T, E> {
    fn from(error: E) -> Self {
        Outcome::failure(error)
    }
}
