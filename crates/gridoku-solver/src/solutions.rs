//! Depth-first enumeration of board solutions.

use std::iter::FusedIterator;

use gridoku_core::Progress;

use crate::Board;

/// A lazy iterator over every solution of a board.
///
/// Returned by [`Board::solve`]. Each call to `next` advances a
/// depth-first search just far enough to produce one more solved board,
/// so callers that only need the first solution (or want to stop after
/// proving uniqueness with two) never pay for the full enumeration.
///
/// The search keeps an explicit stack of board snapshots. Popping a
/// board, it propagates to a fixpoint; a contradiction prunes the
/// branch, a fully determined board is yielded, and otherwise the cell
/// with the fewest candidates is branched on. Children are pushed in
/// descending value order so they pop in ascending order.
#[derive(Debug)]
pub struct Solutions {
    pending: Vec<Board>,
}

impl Solutions {
    pub(crate) fn new(root: Board) -> Self {
        Self {
            pending: vec![root],
        }
    }
}

impl Iterator for Solutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while let Some(mut board) = self.pending.pop() {
            if board.propagate() == Progress::Failed {
                continue;
            }

            let Some(position) = board.pick_branch_cell() else {
                // Every remaining cell is determined; propagation already
                // rejected duplicates, so this is a solution.
                return Some(board);
            };

            let candidates = board.cells()[position].candidates();
            board.trace().record_branch(position, candidates);
            for value in candidates.iter().rev() {
                let mut child = board.clone();
                child.resolve_branch(position, value);
                self.pending.push(child);
            }
        }
        None
    }
}

impl FusedIterator for Solutions {}
