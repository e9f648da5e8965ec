//! Board topology recipes.
//!
//! Each recipe assembles a [`Board`] with the constraint groups of a
//! well-known puzzle family:
//!
//! - [`classic`] and [`with_boxes`]: rectangular grids tiled by boxes.
//! - [`classic_with_hyper_regions`]: classic plus four bonus regions.
//! - [`samurai`]: five overlapping 9x9 grids with blocked notches.
//! - [`free_form`]: arbitrary areas described by label characters.
//!
//! Recipes only build geometry; givens are added afterwards through
//! [`Board::add_row`].
//!
//! # Examples
//!
//! ```
//! let mut board = gridoku_factory::with_boxes(4, 4, 2, 2)?;
//! board.add_row("12..")?;
//! board.add_row("34..")?;
//! assert!(board.solve().next().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use gridoku_core::Position;
use gridoku_solver::{Board, BoardError};

/// The errors reported while assembling a recipe board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RecipeError {
    /// The underlying board rejected the geometry.
    Board(BoardError),

    /// The requested box counts do not tile the grid evenly.
    #[display("{boxes_x}x{boxes_y} boxes do not tile a {width}x{height} board")]
    #[from(skip)]
    BoxTiling {
        /// The board width.
        width: u8,
        /// The board height.
        height: u8,
        /// The number of boxes per row.
        boxes_x: u8,
        /// The number of boxes per column.
        boxes_y: u8,
    },

    /// A free-form layout held no rows or no columns.
    #[display("free-form layout is empty")]
    #[from(skip)]
    EmptyLayout,

    /// A free-form layout had rows of different widths.
    #[display("free-form row has {actual} labels, expected {expected}")]
    #[from(skip)]
    RaggedRows {
        /// The width of the first row.
        expected: usize,
        /// The width of the offending row.
        actual: usize,
    },

    /// A free-form layout exceeded the representable board size.
    #[display("free-form layout of {width}x{height} is too large")]
    #[from(skip)]
    OversizedLayout {
        /// The layout width.
        width: usize,
        /// The layout height.
        height: usize,
    },
}

/// The classic 9x9 grid with 3x3 boxes.
///
/// # Errors
///
/// Does not fail in practice; the signature matches the fallible
/// recipes so callers can treat all of them uniformly.
pub fn classic() -> Result<Board, RecipeError> {
    with_boxes(9, 9, 3, 3)
}

/// A `width` x `height` grid tiled by `boxes_x` x `boxes_y` boxes.
///
/// Row and column groups are implied by the geometry; one group is
/// added per box.
///
/// # Errors
///
/// Returns [`RecipeError::BoxTiling`] if the box counts do not divide
/// the grid evenly.
pub fn with_boxes(
    width: u8,
    height: u8,
    boxes_x: u8,
    boxes_y: u8,
) -> Result<Board, RecipeError> {
    if boxes_x == 0 || boxes_y == 0 || width % boxes_x != 0 || height % boxes_y != 0 {
        return Err(RecipeError::BoxTiling {
            width,
            height,
            boxes_x,
            boxes_y,
        });
    }
    let box_width = width / boxes_x;
    let box_height = height / boxes_y;

    let mut board = Board::new(width, height)?;
    for by in 0..boxes_y {
        for bx in 0..boxes_x {
            board.create_rule(
                format!("box ({bx}, {by})"),
                box_positions(bx * box_width, by * box_height, box_width, box_height),
            )?;
        }
    }
    Ok(board)
}

/// The classic grid plus the four hyper 3x3 bonus regions.
///
/// The regions sit one cell in from each corner, leaving a one-cell
/// margin between them and the border.
///
/// # Errors
///
/// Does not fail in practice; see [`classic`].
pub fn classic_with_hyper_regions() -> Result<Board, RecipeError> {
    const MARGIN: u8 = 1;
    const SECOND: u8 = MARGIN + 3 + MARGIN;

    let mut board = classic()?;
    for (ox, oy) in [
        (MARGIN, MARGIN),
        (SECOND, MARGIN),
        (MARGIN, SECOND),
        (SECOND, SECOND),
    ] {
        board.create_rule(format!("hyper ({ox}, {oy})"), box_positions(ox, oy, 3, 3))?;
    }
    Ok(board)
}

/// The samurai layout: five overlapping 9x9 grids on a 21x21 board.
///
/// The four notches between the corner grids are blocked. Every 3x3
/// area that survives the notches gets a group, and each of the five
/// grids gets its rows and columns; lines crossing a notch keep their
/// exactly-once check but cannot demand every value.
///
/// # Errors
///
/// Does not fail in practice; see [`classic`].
pub fn samurai() -> Result<Board, RecipeError> {
    const GRID: u8 = 9;
    const BOX: u8 = 3;
    const SIDE: u8 = 21;

    let mut board = Board::with_max_value(SIDE, SIDE, GRID)?;

    // Notches between the corner grids.
    let notches = [
        (GRID, 0, BOX, 2 * BOX),
        (GRID, SIDE - 2 * BOX, BOX, 2 * BOX),
        (0, GRID, 2 * BOX, BOX),
        (SIDE - 2 * BOX, GRID, 2 * BOX, BOX),
    ];
    for (x0, y0, w, h) in notches {
        for position in box_positions(x0, y0, w, h) {
            board.block_cell(position)?;
        }
    }

    // One group per 3x3 area, skipping the areas swallowed by a notch.
    for ay in 0..SIDE / BOX {
        for ax in 0..SIDE / BOX {
            let members: Vec<_> = box_positions(ax * BOX, ay * BOX, BOX, BOX).collect();
            if members.iter().any(|&p| board.cells()[p].is_blocked()) {
                continue;
            }
            board.create_rule(format!("area ({ax}, {ay})"), members)?;
        }
    }

    // Rows and columns of the four corner grids span the whole board
    // edge to edge; the center grid adds its own in the middle band.
    let middle = 2 * BOX..2 * BOX + GRID;
    for i in 0..SIDE {
        board.create_rule(
            format!("column upper {i}"),
            (0..GRID).map(|y| Position::new(i, y)),
        )?;
        board.create_rule(
            format!("column lower {i}"),
            (SIDE - GRID..SIDE).map(|y| Position::new(i, y)),
        )?;
        board.create_rule(
            format!("row left {i}"),
            (0..GRID).map(|x| Position::new(x, i)),
        )?;
        board.create_rule(
            format!("row right {i}"),
            (SIDE - GRID..SIDE).map(|x| Position::new(x, i)),
        )?;

        if middle.contains(&i) {
            board.create_rule(
                format!("column middle {i}"),
                middle.clone().map(|y| Position::new(i, y)),
            )?;
            board.create_rule(
                format!("row middle {i}"),
                middle.clone().map(|x| Position::new(x, i)),
            )?;
        }
    }
    Ok(board)
}

/// A board whose areas are described by rows of label characters.
///
/// All rows must have the same width, and cells sharing a label form
/// one group. Row and column groups are implied by the geometry as
/// usual.
///
/// # Examples
///
/// ```
/// let board = gridoku_factory::free_form(&[
///     "AABB",
///     "AABB",
///     "CCDD",
///     "CCDD",
/// ])?;
/// assert_eq!(board.rules().len(), 12);
/// # Ok::<(), gridoku_factory::RecipeError>(())
/// ```
///
/// # Errors
///
/// Returns [`RecipeError::EmptyLayout`] for an empty layout,
/// [`RecipeError::RaggedRows`] when row widths differ, and
/// [`RecipeError::OversizedLayout`] when a dimension exceeds the
/// representable board size.
pub fn free_form(layout: &[&str]) -> Result<Board, RecipeError> {
    let Some(first) = layout.first() else {
        return Err(RecipeError::EmptyLayout);
    };
    let width = first.chars().count();
    if width == 0 {
        return Err(RecipeError::EmptyLayout);
    }
    for row in layout {
        let actual = row.chars().count();
        if actual != width {
            return Err(RecipeError::RaggedRows {
                expected: width,
                actual,
            });
        }
    }
    let (Ok(board_width), Ok(board_height)) = (u8::try_from(width), u8::try_from(layout.len()))
    else {
        return Err(RecipeError::OversizedLayout {
            width,
            height: layout.len(),
        });
    };

    let mut board = Board::new(board_width, board_height)?;

    // Row-major label list, paired with the position of each label.
    let labels: Vec<char> = layout.iter().flat_map(|row| row.chars()).collect();
    let positions: Vec<Position> = (0..board_height)
        .flat_map(|y| (0..board_width).map(move |x| Position::new(x, y)))
        .collect();

    let mut seen = Vec::new();
    for &label in &labels {
        if seen.contains(&label) {
            continue;
        }
        seen.push(label);
        let members = labels
            .iter()
            .zip(&positions)
            .filter(|&(&l, _)| l == label)
            .map(|(_, &position)| position);
        board.create_rule(format!("area {label}"), members)?;
    }
    Ok(board)
}

fn box_positions(x0: u8, y0: u8, width: u8, height: u8) -> impl Iterator<Item = Position> {
    (0..height).flat_map(move |dy| (0..width).map(move |dx| Position::new(x0 + dx, y0 + dy)))
}
