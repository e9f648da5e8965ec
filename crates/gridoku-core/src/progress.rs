//! Propagation outcome signals.

/// The outcome of one propagation step.
///
/// Contradictions are an expected result of search, not an error: a
/// `Failed` signal prunes the current branch and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A contradiction was found; the current branch has no solutions.
    Failed,
    /// Nothing changed.
    NoProgress,
    /// At least one cell was fixed.
    Progress,
}

impl Progress {
    /// Combines two step outcomes.
    ///
    /// `Failed` dominates everything; otherwise `Progress` dominates
    /// `NoProgress`, and `NoProgress` is the identity. Folding a round of
    /// rule propagation with this operation yields `Progress` exactly
    /// when another round is worth running.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Progress;
    ///
    /// assert_eq!(Progress::Failed.combine(Progress::Progress), Progress::Failed);
    /// assert_eq!(Progress::Progress.combine(Progress::NoProgress), Progress::Progress);
    /// assert_eq!(Progress::NoProgress.combine(Progress::NoProgress), Progress::NoProgress);
    /// ```
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        match self {
            Self::Failed => Self::Failed,
            Self::NoProgress => other,
            Self::Progress => {
                if other == Self::Failed {
                    Self::Failed
                } else {
                    Self::Progress
                }
            }
        }
    }

    /// Returns whether this signal is `Failed`.
    #[must_use]
    pub fn is_failed(self) -> bool {
        self == Self::Failed
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Progress::{self, Failed, NoProgress, Progress as Made};

    #[test]
    fn test_combine_table() {
        assert_eq!(Failed.combine(Failed), Failed);
        assert_eq!(Failed.combine(NoProgress), Failed);
        assert_eq!(Failed.combine(Made), Failed);
        assert_eq!(NoProgress.combine(Failed), Failed);
        assert_eq!(NoProgress.combine(NoProgress), NoProgress);
        assert_eq!(NoProgress.combine(Made), Made);
        assert_eq!(Made.combine(Failed), Failed);
        assert_eq!(Made.combine(NoProgress), Made);
        assert_eq!(Made.combine(Made), Made);
    }

    fn any_signal() -> impl Strategy<Value = Progress> {
        prop_oneof![Just(Failed), Just(NoProgress), Just(Made)]
    }

    proptest! {
        #[test]
        fn prop_failed_dominates(signal in any_signal()) {
            prop_assert_eq!(Failed.combine(signal), Failed);
            prop_assert_eq!(signal.combine(Failed), Failed);
        }

        #[test]
        fn prop_no_progress_is_identity(signal in any_signal()) {
            prop_assert_eq!(NoProgress.combine(signal), signal);
            prop_assert_eq!(signal.combine(NoProgress), signal);
        }

        #[test]
        fn prop_combine_is_commutative(a in any_signal(), b in any_signal()) {
            prop_assert_eq!(a.combine(b), b.combine(a));
        }
    }
}
