//! Step-aware range iteration, reference-returning lookup, and list, JSON,
//! and task helpers built on the `ratchet-core` error algebra.

pub mod json;
pub mod list;
pub mod lookup;
pub mod range;
pub mod task;

pub use lookup::{first_match, for_each_mutate};
pub use range::{Bound, RangeCursor, StepRange};
