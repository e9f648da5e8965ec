//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a board, with `x` growing to the right and `y`
/// growing downwards.
///
/// Positions identify cells for the lifetime of a board: constraint
/// groups store member positions rather than cell references, which is
/// what makes cloning a board for a trial branch a plain deep copy.
///
/// # Examples
///
/// ```
/// use gridoku_core::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.to_string(), "(3, 7)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from its column and row indices.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column index.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row index.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_display() {
        let pos = Position::new(0, 20);
        assert_eq!(pos.x(), 0);
        assert_eq!(pos.y(), 20);
        assert_eq!(format!("{pos}"), "(0, 20)");
    }

    #[test]
    fn test_ordering_is_row_major_per_column_first() {
        // Ord derives field order: x, then y. Callers that need row-major
        // order sort by (y, x) explicitly.
        assert!(Position::new(1, 0) > Position::new(0, 8));
    }
}
