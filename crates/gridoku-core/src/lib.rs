//! Core data model for generalized exactly-once grid puzzles.
//!
//! This crate provides the leaf types shared by the solver and the
//! board-topology recipes:
//!
//! - [`Position`]: immutable cell coordinates.
//! - [`ValueSet`]: a bitmask set of candidate values.
//! - [`Progress`]: the `Failed` / `NoProgress` / `Progress` signal that
//!   propagation steps report, with its combination rule.
//! - [`Cell`]: one grid position holding a value, a candidate set, or a
//!   permanently blocked hole.
//! - [`CellGrid`]: row-major cell storage with deep cloning.
//! - [`TraceSink`]: the explicit narration collaborator that replaces
//!   any global diagnostic state.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{CellGrid, NullSink, Position, Progress, ValueSet};
//!
//! let mut grid = CellGrid::new(9, 9, 9);
//! for cell in grid.iter_mut() {
//!     cell.reset_candidates();
//! }
//!
//! // Eliminate 1-8 somewhere; the cell fixes itself to 9.
//! let pos = Position::new(4, 4);
//! let signal = grid[pos].remove_candidates(ValueSet::from_iter(1..=8), &NullSink);
//! assert_eq!(signal, Progress::Progress);
//! assert_eq!(grid[pos].value(), 9);
//! ```

pub mod cell;
pub mod cell_grid;
pub mod position;
pub mod progress;
pub mod trace;
pub mod value_set;

pub use self::{
    cell::{Cell, ValueOutOfRange},
    cell_grid::CellGrid,
    position::Position,
    progress::Progress,
    trace::{FixReason, NullSink, TraceSink},
    value_set::ValueSet,
};
