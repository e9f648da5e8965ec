//! The puzzle board: a cell grid plus its constraint groups.

use std::fmt::Write as _;
use std::sync::Arc;

use gridoku_core::{Cell, CellGrid, FixReason, NullSink, Position, Progress, TraceSink, ValueSet};

use crate::{BoardError, Rule, Solutions};

/// A rectangular puzzle board.
///
/// A board couples a [`CellGrid`] with the [`Rule`]s that constrain it
/// and drives propagation and search over them. Rules refer to cells by
/// position, so `Clone` deep-copies the entire search state; the
/// backtracking search relies on that.
///
/// # Examples
///
/// ```
/// use gridoku_solver::Board;
///
/// let mut board = Board::new(4, 4)?;
/// board.add_row("12..")?;
/// board.add_row("34..")?;
/// board.add_row("....")?;
/// board.add_row("....")?;
///
/// let solutions: Vec<_> = board.solve().collect();
/// assert!(!solutions.is_empty());
/// # Ok::<(), gridoku_solver::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: CellGrid,
    rules: Vec<Rule>,
    max_value: u8,
    row_cursor: u8,
    trace: Arc<dyn TraceSink>,
}

impl Board {
    /// Creates a board whose maximum value is the larger of `width` and
    /// `height`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedMaxValue`] if that maximum is
    /// zero or not representable as a candidate set.
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        Self::with_max_value(width, height, width.max(height))
    }

    /// Creates a board with an explicit value domain `1..=max_value`.
    ///
    /// When `max_value` equals the width or the height, a constraint
    /// group is created for every column and every row. On other
    /// geometries no groups are implied and every constraint comes from
    /// [`create_rule`](Self::create_rule).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedMaxValue`] if `max_value` is
    /// zero or not representable as a candidate set.
    pub fn with_max_value(width: u8, height: u8, max_value: u8) -> Result<Self, BoardError> {
        if max_value == 0 || max_value > ValueSet::MAX_VALUE {
            return Err(BoardError::UnsupportedMaxValue { max_value });
        }

        let mut board = Self {
            grid: CellGrid::new(width, height, max_value),
            rules: Vec::new(),
            max_value,
            row_cursor: 0,
            trace: Arc::new(NullSink),
        };
        if max_value == width || max_value == height {
            for x in 0..width {
                let members = (0..height).map(|y| Position::new(x, y));
                board.rules.push(Rule::new(format!("column {x}"), members));
            }
            for y in 0..height {
                let members = (0..width).map(|x| Position::new(x, y));
                board.rules.push(Rule::new(format!("row {y}"), members));
            }
        }
        Ok(board)
    }

    /// Replaces the sink that receives the solve narration.
    #[must_use]
    pub fn with_trace_sink(mut self, trace: Arc<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    /// Returns the board width.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    /// Returns the board height.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// Returns the upper bound of the value domain.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Returns the board's cells.
    #[must_use]
    pub fn cells(&self) -> &CellGrid {
        &self.grid
    }

    /// Returns the cell at `position`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.grid.get(position)
    }

    /// Returns the board's constraint groups.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Fills the next row of the board from text.
    ///
    /// Each character describes one cell: a digit fixes the cell to that
    /// value, `.` leaves it empty, and `/` blocks it. Rows are consumed
    /// top to bottom.
    ///
    /// # Errors
    ///
    /// Returns an error when all rows are already filled, when the row
    /// length differs from the board width, when a character is not
    /// recognized, or when a digit exceeds the value domain.
    pub fn add_row(&mut self, row: &str) -> Result<(), BoardError> {
        if self.row_cursor >= self.height() {
            return Err(BoardError::TooManyRows {
                height: self.height(),
            });
        }
        if row.chars().count() != usize::from(self.width()) {
            return Err(BoardError::RowWidthMismatch {
                expected: self.width(),
                actual: row.chars().count(),
            });
        }

        let y = self.row_cursor;
        for (x, character) in (0..).zip(row.chars()) {
            let cell = &mut self.grid[Position::new(x, y)];
            match character {
                '.' => cell.set_value(Cell::UNSET)?,
                '/' => cell.block(),
                _ => {
                    let digit = character
                        .to_digit(10)
                        .ok_or(BoardError::UnrecognizedCharacter { character })?;
                    #[expect(clippy::cast_possible_truncation)]
                    cell.set_value(digit as u8)?;
                }
            }
        }
        self.row_cursor += 1;
        Ok(())
    }

    /// Turns the cell at `position` into a permanent hole.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PositionOutOfBounds`] if `position` lies
    /// outside the board.
    pub fn block_cell(&mut self, position: Position) -> Result<(), BoardError> {
        let (width, height) = (self.width(), self.height());
        let Some(cell) = self.grid.get_mut(position) else {
            return Err(BoardError::PositionOutOfBounds {
                position,
                width,
                height,
            });
        };
        cell.block();
        Ok(())
    }

    /// Adds a constraint group over `positions`.
    ///
    /// Groups may overlap freely and duplicate positions within one
    /// group are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PositionOutOfBounds`] if any position lies
    /// outside the board.
    pub fn create_rule(
        &mut self,
        name: impl Into<String>,
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<(), BoardError> {
        let positions: Vec<_> = positions.into_iter().collect();
        for &position in &positions {
            if !self.grid.contains(position) {
                return Err(BoardError::PositionOutOfBounds {
                    position,
                    width: self.width(),
                    height: self.height(),
                });
            }
        }
        self.rules.push(Rule::new(name, positions));
        Ok(())
    }

    /// Returns whether no constraint group currently holds a duplicate
    /// value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(|rule| rule.is_valid(&self.grid))
    }

    /// Renders the board as one line of digits per row.
    ///
    /// Unset and blocked cells both render as `0`.
    #[must_use]
    pub fn solution_text(&self) -> String {
        let mut text = String::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let value = self.grid[Position::new(x, y)].value();
                let _ = write!(text, "{value}");
            }
            text.push('\n');
        }
        text
    }

    /// Recomputes every cell's candidate set from its current value.
    pub(crate) fn reset_candidates(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.reset_candidates();
        }
    }

    /// Runs one propagation sweep over all constraint groups.
    ///
    /// Reports [`Progress::Failed`] immediately when the board holds a
    /// duplicate, without touching any candidates.
    pub(crate) fn simplify(&mut self) -> Progress {
        if !self.is_valid() {
            return Progress::Failed;
        }
        let mut result = Progress::NoProgress;
        for rule in &self.rules {
            result = result.combine(rule.solve(&mut self.grid, &*self.trace));
            if result.is_failed() {
                return Progress::Failed;
            }
        }
        result
    }

    /// Sweeps until a fixpoint: no group makes progress, or one fails.
    pub(crate) fn propagate(&mut self) -> Progress {
        loop {
            match self.simplify() {
                Progress::Progress => {}
                done => return done,
            }
        }
    }

    /// Picks the cell to branch on: among the members of all groups, an
    /// undetermined cell with the fewest remaining candidates. Ties go to
    /// the first such cell in group insertion order.
    pub(crate) fn pick_branch_cell(&self) -> Option<Position> {
        let mut best: Option<(usize, Position)> = None;
        for rule in &self.rules {
            for &position in rule.members() {
                let count = self.grid[position].possible_count();
                if count > 1 && best.is_none_or(|(min, _)| count < min) {
                    best = Some((count, position));
                }
            }
        }
        best.map(|(_, position)| position)
    }

    pub(crate) fn trace(&self) -> &dyn TraceSink {
        &*self.trace
    }

    /// Fixes a branched cell to one of its candidates.
    pub(crate) fn resolve_branch(&mut self, position: Position, value: u8) {
        let trace = Arc::clone(&self.trace);
        self.grid[position].resolve(value, FixReason::Branch, &*trace);
    }

    /// Lazily enumerates every solution of the board.
    ///
    /// The board itself is left untouched; the search works on clones.
    /// Solutions come out in ascending branch-value order and each
    /// yielded board is fully filled and valid.
    #[must_use]
    pub fn solve(&self) -> Solutions {
        let mut root = self.clone();
        root.reset_candidates();
        Solutions::new(root)
    }
}
