//! Reference-returning search and in-place mutation over slices.
//!
//! Both helpers hand out `&mut T` into the caller's storage, so the borrow
//! checker enforces the contract the original design could only document:
//! no structural mutation (insert/remove/resize) of the sequence while a
//! returned reference is alive.

use ratchet_core::{RatchetError, RatchetResult};

/// First element satisfying `predicate`, as a mutable reference.
///
/// Scans in index order. The caller can read and overwrite the matched slot
/// directly, without reinserting into the sequence. Fails with `NotFound`
/// when no element matches.
pub fn first_match<'a, T>(
    items: &'a mut [T],
    predicate: impl Fn(&T) -> bool,
) -> RatchetResult<&'a mut T> {
    for (index, item) in items.iter_mut().enumerate() {
        if predicate(item) {
            tracing::trace!(index, "first_match hit");
            return Ok(item);
        }
    }

    Err(RatchetError::NotFound(
        "no element satisfied the predicate".into(),
    ))
}

/// Visits every element in index order `0..n-1` as a mutable reference.
///
/// The action may overwrite each slot in place; elements are never added,
/// removed, or reordered.
pub fn for_each_mutate<T>(items: &mut [T], mut action: impl FnMut(&mut T)) {
    for item in items.iter_mut() {
        action(item);
    }
}
