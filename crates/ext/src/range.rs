//! Step-aware iteration over inclusive integer ranges.
//!
//! A [`StepRange`] is a pair of inclusive bounds plus a positive step.
//! Direction is inferred from the bounds (descending iff `start > end`),
//! never stored by the caller, and equal bounds yield exactly one value.
//! Each call to [`StepRange::iter`] produces a fresh, independent
//! [`RangeCursor`], so ranges are freely restartable.

use ratchet_core::{RatchetError, RatchetResult};

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A range bound at the construction boundary.
///
/// Only concrete bounds can be iterated; `FromEnd` exists so callers
/// translating from open/relative range syntax get a typed rejection
/// instead of silent misbehavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// A concrete integer position.
    At(i64),
    /// A position counted backwards from an (unknown here) end.
    FromEnd(i64),
}

// ---------------------------------------------------------------------------
// StepRange
// ---------------------------------------------------------------------------

/// Inclusive integer range with a fixed positive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    start: i64,
    end: i64,
    step: i64,
}

impl StepRange {
    /// Range over `[start, end]` with step 1. Both bounds are inclusive.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            step: 1,
        }
    }

    /// Range over `[start, end]` with an explicit step.
    ///
    /// Rejects `step <= 0`: the produced sequence must make progress
    /// towards `end` on every advance.
    pub fn with_step(start: i64, end: i64, step: i64) -> RatchetResult<Self> {
        if step <= 0 {
            return Err(RatchetError::InvalidArgument(format!(
                "step must be positive, got {step}"
            )));
        }
        Ok(Self { start, end, step })
    }

    /// Range from typed bounds with step 1. Fails with `UnsupportedRange`
    /// unless both bounds are concrete.
    pub fn from_bounds(start: Bound, end: Bound) -> RatchetResult<Self> {
        let (start, end) = Self::resolve_bounds(start, end)?;
        Ok(Self::new(start, end))
    }

    /// Range from typed bounds with an explicit step. Bounds are checked
    /// first, then the step.
    pub fn from_bounds_with_step(start: Bound, end: Bound, step: i64) -> RatchetResult<Self> {
        let (start, end) = Self::resolve_bounds(start, end)?;
        Self::with_step(start, end, step)
    }

    fn resolve_bounds(start: Bound, end: Bound) -> RatchetResult<(i64, i64)> {
        match (start, end) {
            (Bound::At(start), Bound::At(end)) => Ok((start, end)),
            _ => Err(RatchetError::UnsupportedRange(
                "from-end bounds are not supported; use concrete integers".into(),
            )),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Descending iff `start > end`. Equal bounds count as ascending.
    pub fn is_descending(&self) -> bool {
        self.start > self.end
    }

    /// Number of values the range yields: `span / step + 1`.
    ///
    /// Never zero — equal bounds still yield the single shared value.
    pub fn len(&self) -> u64 {
        self.start.abs_diff(self.end) / self.step.unsigned_abs() + 1
    }

    /// Always false: equal bounds still yield the single shared value.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Fresh cursor whose first advance lands exactly on `start`.
    pub fn iter(&self) -> RangeCursor {
        RangeCursor::new(self)
    }

    /// Drives a cursor to exhaustion, invoking `action` once per value in
    /// iteration order.
    pub fn for_each(&self, mut action: impl FnMut(i64)) {
        let mut cursor = self.iter();
        while cursor.advance() {
            action(cursor.current());
        }
    }
}

impl<'a> IntoIterator for &'a StepRange {
    type Item = i64;
    type IntoIter = RangeCursor;

    fn into_iter(self) -> RangeCursor {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeCursor
// ---------------------------------------------------------------------------

/// Mutable iteration state over a [`StepRange`].
///
/// Advance-then-read protocol: [`RangeCursor::current`] is meaningful only
/// after an [`RangeCursor::advance`] that returned `true`. The `Iterator`
/// impl wraps the same protocol.
///
/// The value to land on next is carried as an `Option` and stepped with
/// checked arithmetic, so bounds within one step of `i64::MIN`/`i64::MAX`
/// terminate instead of wrapping.
#[derive(Debug, Clone)]
pub struct RangeCursor {
    /// Value the next successful advance lands on; `None` once exhausted.
    upcoming: Option<i64>,
    current: i64,
    end: i64,
    step: i64,
    descending: bool,
}

impl RangeCursor {
    fn new(range: &StepRange) -> Self {
        // `start` is always in bounds (a range yields at least one value),
        // so it is unconditionally the first landing point.
        Self {
            upcoming: Some(range.start),
            current: range.start,
            end: range.end,
            step: range.step,
            descending: range.is_descending(),
        }
    }

    /// Step towards the end bound. Returns whether a value is available.
    pub fn advance(&mut self) -> bool {
        match self.upcoming {
            Some(value) => {
                self.current = value;
                self.upcoming = if self.descending {
                    value.checked_sub(self.step).filter(|&v| v >= self.end)
                } else {
                    value.checked_add(self.step).filter(|&v| v <= self.end)
                };
                true
            }
            None => false,
        }
    }

    /// The value the last successful advance landed on.
    pub fn current(&self) -> i64 {
        self.current
    }
}

impl Iterator for RangeCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.advance() {
            Some(self.current)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_yields_inclusive_sequence() {
        let values: Vec<i64> = StepRange::new(1, 10).iter().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn zero_based_range_includes_both_ends() {
        // 0..=10 is 11 values, not 10.
        assert_eq!(StepRange::new(0, 10).iter().count(), 11);
        assert_eq!(StepRange::new(0, 10).len(), 11);
    }

    #[test]
    fn descending_is_inferred_from_bounds() {
        let range = StepRange::new(10, 1);
        assert!(range.is_descending());
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn equal_bounds_yield_exactly_one_value() {
        let values: Vec<i64> = StepRange::new(5, 5).iter().collect();
        assert_eq!(values, vec![5]);
    }

    #[test]
    fn stepped_range_lands_on_multiples() {
        let range = StepRange::with_step(0, 10, 2).unwrap();
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn uneven_step_truncates_instead_of_overshooting() {
        let range = StepRange::with_step(0, 10, 3).unwrap();
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![0, 3, 6, 9]);

        let range = StepRange::with_step(10, 0, 4).unwrap();
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![10, 6, 2]);
    }

    #[test]
    fn first_value_is_always_start() {
        for step in 1..=5 {
            let range = StepRange::with_step(7, 40, step).unwrap();
            assert_eq!(range.iter().next(), Some(7));
        }
    }

    #[test]
    fn zero_and_negative_steps_are_rejected() {
        assert!(matches!(
            StepRange::with_step(0, 10, 0),
            Err(RatchetError::InvalidArgument(_))
        ));
        assert!(matches!(
            StepRange::with_step(0, 10, -2),
            Err(RatchetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_end_bounds_are_rejected() {
        assert!(matches!(
            StepRange::from_bounds(Bound::At(0), Bound::FromEnd(1)),
            Err(RatchetError::UnsupportedRange(_))
        ));
        assert!(matches!(
            StepRange::from_bounds(Bound::FromEnd(3), Bound::At(9)),
            Err(RatchetError::UnsupportedRange(_))
        ));
        assert!(StepRange::from_bounds(Bound::At(0), Bound::At(9)).is_ok());
    }

    #[test]
    fn from_end_bounds_are_rejected_on_the_stepped_path() {
        assert!(matches!(
            StepRange::from_bounds_with_step(Bound::At(0), Bound::FromEnd(1), 2),
            Err(RatchetError::UnsupportedRange(_))
        ));
        // Bounds are checked before the step.
        assert!(matches!(
            StepRange::from_bounds_with_step(Bound::FromEnd(3), Bound::At(9), 0),
            Err(RatchetError::UnsupportedRange(_))
        ));
        assert!(matches!(
            StepRange::from_bounds_with_step(Bound::At(0), Bound::At(9), 0),
            Err(RatchetError::InvalidArgument(_))
        ));

        let range = StepRange::from_bounds_with_step(Bound::At(0), Bound::At(10), 2).unwrap();
        assert_eq!(range.iter().count(), 6);
    }

    #[test]
    fn bounds_at_the_integer_extremes_terminate() {
        let values: Vec<i64> = StepRange::new(i64::MIN, i64::MIN).iter().collect();
        assert_eq!(values, vec![i64::MIN]);

        let values: Vec<i64> = StepRange::new(i64::MAX - 1, i64::MAX).iter().collect();
        assert_eq!(values, vec![i64::MAX - 1, i64::MAX]);

        let values: Vec<i64> = StepRange::new(i64::MIN + 1, i64::MIN).iter().collect();
        assert_eq!(values, vec![i64::MIN + 1, i64::MIN]);
    }

    #[test]
    fn large_steps_near_the_extremes_do_not_wrap() {
        let range = StepRange::with_step(i64::MAX - 3, i64::MAX, 2).unwrap();
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![i64::MAX - 3, i64::MAX - 1]);

        let range = StepRange::with_step(i64::MIN + 3, i64::MIN, 2).unwrap();
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![i64::MIN + 3, i64::MIN + 1]);

        let range = StepRange::with_step(0, i64::MAX, i64::MAX).unwrap();
        let values: Vec<i64> = range.iter().collect();
        assert_eq!(values, vec![0, i64::MAX]);
    }

    #[test]
    fn a_range_is_never_empty() {
        assert!(!StepRange::new(5, 5).is_empty());
        assert!(!StepRange::new(10, 1).is_empty());
    }

    #[test]
    fn ranges_are_restartable() {
        let range = StepRange::new(1, 3);
        let first: Vec<i64> = range.iter().collect();
        let second: Vec<i64> = range.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn raw_cursor_protocol_matches_iterator() {
        let range = StepRange::with_step(0, 10, 2).unwrap();
        let mut cursor = range.iter();
        let mut via_protocol = Vec::new();
        while cursor.advance() {
            via_protocol.push(cursor.current());
        }
        let via_iterator: Vec<i64> = range.iter().collect();
        assert_eq!(via_protocol, via_iterator);
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        StepRange::new(1, 10).for_each(|i| seen.push(i));
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn len_counts_truncated_sequences() {
        assert_eq!(StepRange::with_step(0, 10, 3).unwrap().len(), 4);
        assert_eq!(StepRange::with_step(10, 0, 4).unwrap().len(), 3);
        assert_eq!(StepRange::new(5, 5).len(), 1);
    }
}
