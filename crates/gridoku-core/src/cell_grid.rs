//! Row-major cell storage.

use std::ops::{Index, IndexMut};

use crate::{Cell, Position};

/// The cells of a board, stored row-major.
///
/// The grid owns every cell; constraint groups refer to cells by
/// [`Position`], so cloning the grid deep-copies the whole board state
/// with group membership preserved by coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Creates a grid of unset cells sharing the value domain
    /// `1..=max_value`.
    #[must_use]
    pub fn new(width: u8, height: u8, max_value: u8) -> Self {
        let mut cells = Vec::with_capacity(usize::from(width) * usize::from(height));
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Position::new(x, y), max_value));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the grid width.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the grid height.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns whether `position` lies on the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x() < self.width && position.y() < self.height
    }

    fn offset(&self, position: Position) -> usize {
        usize::from(position.y()) * usize::from(self.width) + usize::from(position.x())
    }

    /// Returns the cell at `position`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.contains(position).then(|| &self.cells[self.offset(position)])
    }

    /// Returns the cell at `position` mutably, or `None` when out of
    /// bounds.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if self.contains(position) {
            let offset = self.offset(position);
            Some(&mut self.cells[offset])
        } else {
            None
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterates over all cells mutably in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Iterates over all positions of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

impl Index<Position> for CellGrid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `position` is outside the grid.
    fn index(&self, position: Position) -> &Cell {
        assert!(
            self.contains(position),
            "position {position} is outside the {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[self.offset(position)]
    }
}

impl IndexMut<Position> for CellGrid {
    fn index_mut(&mut self, position: Position) -> &mut Cell {
        assert!(
            self.contains(position),
            "position {position} is outside the {}x{} grid",
            self.width,
            self.height
        );
        let offset = self.offset(position);
        &mut self.cells[offset]
    }
}
