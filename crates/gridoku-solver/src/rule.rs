//! Exactly-once constraint groups.

use gridoku_core::{CellGrid, FixReason, Position, Progress, TraceSink, ValueSet};
use tinyvec::TinyVec;

/// A named set of cells that must contain each value at most once.
///
/// Rules hold member *positions*; the cells themselves live in the
/// board's [`CellGrid`]. Membership is fixed at creation and rules may
/// overlap arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    members: Vec<Position>,
}

impl Rule {
    /// Creates a rule over `members`, dropping duplicate positions while
    /// preserving first-seen order.
    #[must_use]
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = Position>) -> Self {
        let mut seen = Vec::new();
        for position in members {
            if !seen.contains(&position) {
                seen.push(position);
            }
        }
        Self {
            name: name.into(),
            members: seen,
        }
    }

    /// Returns the rule's description.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member positions in creation order.
    #[must_use]
    pub fn members(&self) -> &[Position] {
        &self.members
    }

    /// Returns the set of values currently fixed among the members.
    fn fixed_values(&self, grid: &CellGrid) -> ValueSet {
        let mut fixed = ValueSet::EMPTY;
        for &position in &self.members {
            let cell = &grid[position];
            if cell.has_value() {
                fixed.insert(cell.value());
            }
        }
        fixed
    }

    /// Returns whether no value repeats among the filled member cells.
    ///
    /// Blocked cells never carry a value, so they cannot violate this.
    #[must_use]
    pub fn is_valid(&self, grid: &CellGrid) -> bool {
        let mut seen = ValueSet::EMPTY;
        for &position in &self.members {
            let cell = &grid[position];
            if cell.has_value() {
                if seen.contains(cell.value()) {
                    return false;
                }
                seen.insert(cell.value());
            }
        }
        true
    }

    /// Returns whether every member is filled and the rule is valid.
    ///
    /// Advisory only; nothing in the solving path depends on it. A rule
    /// containing a blocked member can never report complete, because a
    /// blocked cell never holds a value.
    #[must_use]
    pub fn is_complete(&self, grid: &CellGrid) -> bool {
        self.members.iter().all(|&position| grid[position].has_value()) && self.is_valid(grid)
    }

    /// Runs one round of local propagation over the rule's members.
    ///
    /// Phase one eliminates every fixed value from the candidates of the
    /// unfilled members. Phase two then looks for values with exactly
    /// one possible home left in the rule and fixes them; a value with
    /// no possible home is a contradiction. The two phase signals are
    /// merged with [`Progress::combine`].
    pub fn solve(&self, grid: &mut CellGrid, trace: &dyn TraceSink) -> Progress {
        let eliminated = self.eliminate(grid, trace);
        if eliminated.is_failed() {
            return Progress::Failed;
        }
        let forced = self.fix_forced_singles(grid, trace);
        eliminated.combine(forced)
    }

    /// Removes the values already fixed in the rule from every unfilled
    /// member's candidates.
    fn eliminate(&self, grid: &mut CellGrid, trace: &dyn TraceSink) -> Progress {
        let fixed = self.fixed_values(grid);
        let mut result = Progress::NoProgress;
        for &position in &self.members {
            let cell = &mut grid[position];
            if !cell.has_value() {
                result = result.combine(cell.remove_candidates(fixed, trace));
            }
        }
        result
    }

    /// For every value the rule still needs, counts the unfilled members
    /// that can hold it: none is a contradiction, exactly one forces a
    /// fixation.
    fn fix_forced_singles(&self, grid: &mut CellGrid, trace: &dyn TraceSink) -> Progress {
        // A hole can absorb any value, so a rule crossing one never
        // demands that every value appear and never forces a placement.
        // Partial lines over holes thus reduce to the exactly-once check
        // plus elimination.
        if self.members.iter().any(|&position| grid[position].is_blocked()) {
            return Progress::NoProgress;
        }

        // Recomputed after phase one so freshly collapsed cells count as
        // fixed here.
        let fixed = self.fixed_values(grid);
        let mut result = Progress::NoProgress;

        for nth in 1..=self.members.len() {
            // A rule wider than the value domain can never place its
            // highest values; that shows up below as a contradiction.
            let Ok(value) = u8::try_from(nth) else {
                return Progress::Failed;
            };
            if value > ValueSet::MAX_VALUE {
                return Progress::Failed;
            }
            if fixed.contains(value) {
                continue;
            }

            let mut homes: TinyVec<[Position; 16]> = TinyVec::new();
            for &position in &self.members {
                let cell = &grid[position];
                if !cell.has_value() && cell.is_value_possible(value) {
                    homes.push(position);
                }
            }
            match homes.as_slice() {
                [] => return Progress::Failed,
                &[position] => {
                    grid[position].resolve(value, FixReason::OnlyPlaceInRule(&self.name), trace);
                    result = Progress::Progress;
                }
                _ => {}
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use gridoku_core::NullSink;

    use super::*;

    fn grid_3x1() -> CellGrid {
        let mut grid = CellGrid::new(3, 1, 3);
        for cell in grid.iter_mut() {
            cell.reset_candidates();
        }
        grid
    }

    fn row_rule() -> Rule {
        Rule::new(
            "row 0",
            (0..3).map(|x| Position::new(x, 0)),
        )
    }

    #[test]
    fn test_duplicate_members_collapse() {
        let pos = Position::new(1, 0);
        let rule = Rule::new("twice", [pos, pos, Position::new(0, 0)]);
        assert_eq!(rule.members(), &[pos, Position::new(0, 0)]);
    }

    #[test]
    fn test_is_valid_detects_duplicates() {
        let mut grid = grid_3x1();
        let rule = row_rule();
        assert!(rule.is_valid(&grid));

        grid[Position::new(0, 0)].set_value(2).unwrap();
        grid[Position::new(2, 0)].set_value(2).unwrap();
        assert!(!rule.is_valid(&grid));
    }

    #[test]
    fn test_elimination_collapses_last_cell() {
        let mut grid = grid_3x1();
        grid[Position::new(0, 0)].set_value(1).unwrap();
        grid[Position::new(1, 0)].set_value(3).unwrap();
        for cell in grid.iter_mut() {
            cell.reset_candidates();
        }

        let signal = row_rule().solve(&mut grid, &NullSink);
        assert_eq!(signal, Progress::Progress);
        assert_eq!(grid[Position::new(2, 0)].value(), 2);
    }

    #[test]
    fn test_forced_single_fixes_unique_home() {
        let mut grid = grid_3x1();
        // Value 3 can only live in the middle cell.
        grid[Position::new(0, 0)]
            .remove_candidates(ValueSet::from_iter([3]), &NullSink);
        grid[Position::new(2, 0)]
            .remove_candidates(ValueSet::from_iter([3]), &NullSink);

        let signal = row_rule().solve(&mut grid, &NullSink);
        assert_eq!(signal, Progress::Progress);
        assert_eq!(grid[Position::new(1, 0)].value(), 3);
    }

    #[test]
    fn test_value_with_no_home_is_a_contradiction() {
        let mut grid = grid_3x1();
        for x in 0..3 {
            grid[Position::new(x, 0)]
                .remove_candidates(ValueSet::from_iter([3]), &NullSink);
        }

        let signal = row_rule().solve(&mut grid, &NullSink);
        assert_eq!(signal, Progress::Failed);
    }

    #[test]
    fn test_hole_absorbs_missing_values() {
        let mut grid = CellGrid::new(3, 1, 3);
        grid[Position::new(2, 0)].block();
        for cell in grid.iter_mut() {
            cell.reset_candidates();
        }
        // Value 3 fits in no open cell. With a hole in the rule that is
        // not a contradiction, the value simply never appears here.
        grid[Position::new(0, 0)]
            .remove_candidates(ValueSet::from_iter([3]), &NullSink);
        grid[Position::new(1, 0)]
            .remove_candidates(ValueSet::from_iter([3]), &NullSink);

        let signal = row_rule().solve(&mut grid, &NullSink);
        assert_eq!(signal, Progress::NoProgress);
        assert!(!grid[Position::new(2, 0)].has_value());
    }

    #[test]
    fn test_hole_suppresses_forcing() {
        let mut grid = CellGrid::new(3, 1, 3);
        grid[Position::new(2, 0)].block();
        for cell in grid.iter_mut() {
            cell.reset_candidates();
        }
        // Value 3 has a unique open home, but a rule crossing a hole
        // never demands the value be placed at all.
        grid[Position::new(0, 0)]
            .remove_candidates(ValueSet::from_iter([3]), &NullSink);

        let signal = row_rule().solve(&mut grid, &NullSink);
        assert_eq!(signal, Progress::NoProgress);
        assert!(!grid[Position::new(1, 0)].has_value());
    }

    #[test]
    fn test_solved_rule_reports_no_progress() {
        let mut grid = grid_3x1();
        for (x, value) in (0..3).zip(1..=3) {
            grid[Position::new(x, 0)].set_value(value).unwrap();
        }
        for cell in grid.iter_mut() {
            cell.reset_candidates();
        }

        let rule = row_rule();
        assert_eq!(rule.solve(&mut grid, &NullSink), Progress::NoProgress);
        assert!(rule.is_complete(&grid));
    }
}
