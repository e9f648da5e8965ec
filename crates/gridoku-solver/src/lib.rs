//! Constraint propagation and backtracking search over exactly-once
//! grid puzzles.
//!
//! The central type is [`Board`]: a rectangular grid of cells plus a
//! collection of [`Rule`]s, each demanding that its member cells hold
//! no value twice. [`Board::solve`] enumerates every solution lazily,
//! alternating rule-local propagation with depth-first trial and error.
//!
//! # Examples
//!
//! ```
//! use gridoku_solver::Board;
//!
//! // A 4x4 Latin square; rows and columns are implied by the geometry.
//! let mut board = Board::new(4, 4)?;
//! board.add_row("1234")?;
//! board.add_row("34..")?;
//! board.add_row("....")?;
//! board.add_row("....")?;
//!
//! for solution in board.solve() {
//!     println!("{}", solution.solution_text());
//! }
//! # Ok::<(), gridoku_solver::BoardError>(())
//! ```

pub mod board;
pub mod error;
pub mod rule;
pub mod solutions;
pub mod trace;

pub use self::{
    board::Board,
    error::BoardError,
    rule::Rule,
    solutions::Solutions,
    trace::{LogSink, RecordingSink},
};
