//! A single grid cell.

use crate::{FixReason, Position, Progress, TraceSink, ValueSet};

/// The error returned when a value outside a cell's range is assigned.
///
/// Valid assignments are `0` (clearing the cell) through the board's
/// maximum value. Negative values are unrepresentable in the `u8`
/// argument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("value {value} is outside the range 0..={max_value}")]
pub struct ValueOutOfRange {
    /// The rejected value.
    pub value: u8,
    /// The cell's maximum value.
    pub max_value: u8,
}

/// One grid position: a fixed value, a set of remaining candidates, or
/// a permanently blocked hole.
///
/// Cells are created unset with an empty candidate set; a solve pass
/// starts by calling [`reset_candidates`](Self::reset_candidates) on
/// every cell, after which propagation only ever shrinks the set.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Cell, NullSink, Position, Progress, ValueSet};
///
/// let mut cell = Cell::new(Position::new(0, 0), 9);
/// cell.reset_candidates();
/// assert_eq!(cell.possible_count(), 9);
///
/// // Removing all but one candidate fixes the cell.
/// let signal = cell.remove_candidates(ValueSet::from_iter(1..=8), &NullSink);
/// assert_eq!(signal, Progress::Progress);
/// assert_eq!(cell.value(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    max_value: u8,
    value: u8,
    blocked: bool,
    candidates: ValueSet,
}

impl Cell {
    /// The value a cell reports while unset.
    pub const UNSET: u8 = 0;

    /// Creates an unset cell at `position` with the value domain
    /// `1..=max_value`.
    #[must_use]
    pub fn new(position: Position, max_value: u8) -> Self {
        Self {
            position,
            max_value,
            value: Self::UNSET,
            blocked: false,
            candidates: ValueSet::EMPTY,
        }
    }

    /// Returns the cell's coordinates.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the upper bound of the cell's value domain.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Returns the cell's value, or [`Self::UNSET`] when unset.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the cell holds a value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value != Self::UNSET
    }

    /// Returns whether the cell is blocked.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Returns the remaining candidate set.
    ///
    /// Meaningful while the cell is unset and not blocked; a fixed cell
    /// reports `{value}` after a reset, a blocked cell reports the empty
    /// set.
    #[must_use]
    pub fn candidates(&self) -> ValueSet {
        self.candidates
    }

    /// Permanently marks the cell as a hole in the board. Idempotent;
    /// there is no unblock operation.
    pub fn block(&mut self) {
        self.blocked = true;
        self.candidates = ValueSet::EMPTY;
    }

    /// Assigns `value` to the cell, `0` meaning unset.
    ///
    /// Candidates are not touched; recomputing them is a separate,
    /// explicit step ([`reset_candidates`](Self::reset_candidates)).
    ///
    /// # Errors
    ///
    /// Returns [`ValueOutOfRange`] if `value` exceeds the cell's maximum.
    pub fn set_value(&mut self, value: u8) -> Result<(), ValueOutOfRange> {
        if value > self.max_value {
            return Err(ValueOutOfRange {
                value,
                max_value: self.max_value,
            });
        }
        self.value = value;
        Ok(())
    }

    /// Recomputes the candidate set from the current value: the full
    /// domain when unset, `{value}` when set, the empty set when
    /// blocked.
    pub fn reset_candidates(&mut self) {
        if self.blocked {
            self.candidates = ValueSet::EMPTY;
        } else if self.has_value() {
            self.candidates = ValueSet::from_iter([self.value]);
        } else {
            self.candidates = ValueSet::full(self.max_value);
        }
    }

    /// Subtracts `excluded` from the candidate set.
    ///
    /// A blocked cell reports [`Progress::NoProgress`] and is left
    /// untouched. If exactly one candidate remains the cell fixes itself
    /// to it and reports [`Progress::Progress`]; if none remain it
    /// reports [`Progress::Failed`]. Mere shrinkage without a collapse
    /// is not progress.
    pub fn remove_candidates(&mut self, excluded: ValueSet, trace: &dyn TraceSink) -> Progress {
        if self.blocked {
            return Progress::NoProgress;
        }
        self.candidates.remove_all(excluded);
        if let Some(value) = self.candidates.as_single() {
            if !self.has_value() {
                self.resolve(value, FixReason::OnlyCandidate, trace);
                return Progress::Progress;
            }
            return Progress::NoProgress;
        }
        if self.candidates.is_empty() {
            return Progress::Failed;
        }
        Progress::NoProgress
    }

    /// Fixes the cell to `value` and recomputes the candidates from it:
    /// `{value}` for a fixation, the full domain again when `value` is
    /// `0` (clearing the cell). The change is reported to `trace`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueOutOfRange`] if `value` exceeds the cell's maximum.
    pub fn fix(
        &mut self,
        value: u8,
        reason: FixReason<'_>,
        trace: &dyn TraceSink,
    ) -> Result<(), ValueOutOfRange> {
        self.set_value(value)?;
        self.reset_candidates();
        trace.record_fix(self.position, value, reason);
        Ok(())
    }

    /// Fixes the cell to a value taken from its own candidate set.
    ///
    /// This is the propagation and branching path: the value is already
    /// known to be in range because candidate sets only ever hold values
    /// of the domain.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a current candidate of the cell.
    pub fn resolve(&mut self, value: u8, reason: FixReason<'_>, trace: &dyn TraceSink) {
        assert!(
            self.candidates.contains(value),
            "resolve requires a current candidate, got {value} at {}",
            self.position
        );
        self.value = value;
        self.candidates = ValueSet::from_iter([value]);
        trace.record_fix(self.position, value, reason);
    }

    /// Returns the number of alternatives the search has to consider for
    /// this cell: 1 for blocked or fixed cells (already resolved, never
    /// branched on), otherwise the candidate count.
    #[must_use]
    pub fn possible_count(&self) -> usize {
        if self.blocked || self.has_value() {
            1
        } else {
            self.candidates.len()
        }
    }

    /// Returns whether `value` is still a candidate. Always false for
    /// blocked cells and for values outside `1..=ValueSet::MAX_VALUE`.
    #[must_use]
    pub fn is_value_possible(&self, value: u8) -> bool {
        (1..=ValueSet::MAX_VALUE).contains(&value) && self.candidates.contains(value)
    }
}
