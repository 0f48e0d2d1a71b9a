//! Result/Error algebra and shared error definitions.
//!
//! Foundation crate -- no async or I/O dependencies.

pub mod error;
pub mod outcome;

pub use error::{RatchetError, RatchetResult};
pub use outcome::{Fault, Outcome, StandardFault};
