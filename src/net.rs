//! The unfolded-cube layout used to address stickers by a flat index.
//!
//! The net is 9 rows of 12 columns:
//!
//! ```text
//!    U
//! L  F  R  B
//!    D
//! ```
//!
//! Indices are 1-based and run row by row, so index `1` is the top left
//! corner and index `108` the bottom right one.

use std::ops::Range;

use crate::{direction::Direction, num::Vector};

pub const ROWS: usize = 9;
pub const COLUMNS: usize = 12;
/// The number of cells in the net, including the empty corners
pub const CELLS: usize = ROWS * COLUMNS;

/// A visible sticker: the piece it is on and the direction it faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sticker {
    pub position: Vector<3>,
    pub facing: Direction,
}

struct Region {
    face: Direction,
    rows: Range<i32>,
    columns: Range<i32>,
    place: fn(i32, i32) -> [i32; 3],
}

const REGIONS: [Region; 6] = [
    Region {
        face: Direction::Front,
        rows: 3..6,
        columns: 3..6,
        place: |row, col| [1, col - 4, 4 - row],
    },
    Region {
        face: Direction::Back,
        rows: 3..6,
        columns: 9..12,
        place: |row, col| [-1, 10 - col, 4 - row],
    },
    Region {
        face: Direction::Left,
        rows: 3..6,
        columns: 0..3,
        place: |row, col| [col - 1, -1, 4 - row],
    },
    Region {
        face: Direction::Right,
        rows: 3..6,
        columns: 6..9,
        place: |row, col| [7 - col, 1, 4 - row],
    },
    Region {
        face: Direction::Up,
        rows: 0..3,
        columns: 3..6,
        place: |row, col| [row - 1, col - 4, 1],
    },
    Region {
        face: Direction::Down,
        rows: 6..9,
        columns: 3..6,
        place: |row, col| [7 - row, col - 4, -1],
    },
];

/// Split a 1-based net index into a 0-based `(row, column)` pair.
#[must_use]
pub fn cell(index: usize) -> Option<(usize, usize)> {
    if !(1..=CELLS).contains(&index) {
        return None;
    }

    let col = (index - 1) % COLUMNS;
    let row = (index - 1 - col) / COLUMNS;
    Some((row, col))
}

/// The sticker shown at a 1-based net index, or `None` for the empty corners
/// of the net and for indices outside of it.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn sticker_at(index: usize) -> Option<Sticker> {
    let (row, col) = cell(index)?;
    let (row, col) = (row as i32, col as i32);

    REGIONS
        .iter()
        .find(|region| region.rows.contains(&row) && region.columns.contains(&col))
        .map(|region| Sticker {
            position: Vector::new([(region.place)(row, col)]),
            facing: region.face,
        })
}

/// The 1-based indices of every cell that carries a sticker.
pub fn sticker_indices() -> impl Iterator<Item = usize> {
    (1..=CELLS).filter(|index| sticker_at(*index).is_some())
}
