//! Board construction errors.

use gridoku_core::{Position, ValueOutOfRange};

/// The errors reported while assembling a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BoardError {
    /// A given clue lies outside the board's value domain.
    Value(ValueOutOfRange),

    /// A textual row has the wrong number of characters.
    #[display("row has {actual} characters, expected {expected}")]
    #[from(skip)]
    RowWidthMismatch {
        /// The board width.
        expected: u8,
        /// The character count of the offending row.
        actual: usize,
    },

    /// More rows were added than the board has.
    #[display("board already has all {height} rows")]
    #[from(skip)]
    TooManyRows {
        /// The board height.
        height: u8,
    },

    /// A row contained a character that is not a digit, `.` or `/`.
    #[display("unrecognized character {character:?} in row")]
    #[from(skip)]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
    },

    /// A constraint group referenced a position outside the board.
    #[display("position {position} is outside the {width}x{height} board")]
    #[from(skip)]
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// The board width.
        width: u8,
        /// The board height.
        height: u8,
    },

    /// The requested value domain cannot be represented.
    #[display("unsupported maximum value {max_value}")]
    #[from(skip)]
    UnsupportedMaxValue {
        /// The rejected maximum value.
        max_value: u8,
    },
}
