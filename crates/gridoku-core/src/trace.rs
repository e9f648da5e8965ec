//! Solver narration.
//!
//! Every forced fixation and every branching decision is reported to a
//! [`TraceSink`] passed in by the board's owner. The narration is
//! advisory output for transcripts and debugging; it never influences
//! propagation or search results. The sink is an explicit collaborator
//! so that two boards solving concurrently can never interfere through
//! shared formatting state.

use std::fmt::{self, Debug, Display};

use crate::{Position, ValueSet};

/// Why a cell was fixed to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixReason<'a> {
    /// Elimination left the cell with a single candidate.
    OnlyCandidate,
    /// Within the named rule, only this cell could still hold the value.
    OnlyPlaceInRule(&'a str),
    /// The search speculatively tried one of several candidates.
    Branch,
}

impl Display for FixReason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnlyCandidate => f.write_str("only one possibility"),
            Self::OnlyPlaceInRule(rule) => write!(f, "only place in {rule}"),
            Self::Branch => f.write_str("trial and error"),
        }
    }
}

/// A receiver for solver narration.
///
/// Implementations must be cheap and side-effect-free with respect to
/// the board: the solver calls them from the middle of propagation.
pub trait TraceSink: Debug + Send + Sync {
    /// Called when `value` is fixed at `position`.
    fn record_fix(&self, position: Position, value: u8, reason: FixReason<'_>);

    /// Called when the search branches on the cell at `position`, about
    /// to try each of `candidates` in ascending order.
    fn record_branch(&self, position: Position, candidates: ValueSet) {
        let _ = (position, candidates);
    }
}

/// A sink that discards all narration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record_fix(&self, _position: Position, _value: u8, _reason: FixReason<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_formatting() {
        assert_eq!(FixReason::OnlyCandidate.to_string(), "only one possibility");
        assert_eq!(
            FixReason::OnlyPlaceInRule("row 3").to_string(),
            "only place in row 3"
        );
        assert_eq!(FixReason::Branch.to_string(), "trial and error");
    }
}
