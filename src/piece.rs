use std::{fmt::Display, ops::Index};

use crate::{
    direction::Direction,
    num::{Matrix, Vector},
};

/// The six sticker colors of the standard color scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Green,
    Blue,
    Orange,
    Red,
    White,
    Yellow,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
        Color::White,
        Color::Yellow,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }

    /// The first letter of the color's name, as printed in the net.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Orange => 'o',
            Color::Red => 'r',
            Color::White => 'w',
            Color::Yellow => 'y',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which color sits on each of a piece's local faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColorMap([Color; 6]);

impl ColorMap {
    /// The solved-cube coloring: green front, blue back, orange left, red
    /// right, white up, yellow down.
    pub const STANDARD: ColorMap = ColorMap([
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
        Color::White,
        Color::Yellow,
    ]);

    #[must_use]
    pub const fn new(colors: [Color; 6]) -> ColorMap {
        ColorMap(colors)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Color)> + '_ {
        Direction::ALL.into_iter().zip(self.0)
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap::STANDARD
    }
}

impl Index<Direction> for ColorMap {
    type Output = Color;

    fn index(&self, index: Direction) -> &Self::Output {
        &self.0[index as usize]
    }
}

/// One of the 27 sub-cubes.
///
/// The colors are fixed to the piece's local faces at creation. Only the
/// accumulated rotation changes as the piece is turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    rotation: Matrix<3, 3>,
    colors: ColorMap,
    position: Vector<3>,
}

impl Piece {
    /// An unrotated piece at `position` with the standard coloring.
    #[must_use]
    pub fn new(position: Vector<3>) -> Piece {
        Piece::with_colors(position, ColorMap::STANDARD)
    }

    #[must_use]
    pub fn with_colors(position: Vector<3>, colors: ColorMap) -> Piece {
        Piece {
            rotation: Matrix::identity(),
            colors,
            position,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> &Matrix<3, 3> {
        &self.rotation
    }

    #[must_use]
    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    #[must_use]
    pub fn position(&self) -> Vector<3> {
        self.position
    }

    /// An independent copy of this piece.
    #[must_use]
    pub fn copy(&self) -> Piece {
        *self
    }

    /// Left-multiply `turn` onto the piece's rotation. The position is left
    /// for the caller to update.
    #[must_use]
    pub fn rotate(&self, turn: &Matrix<3, 3>) -> Piece {
        Piece {
            rotation: turn * &self.rotation,
            ..*self
        }
    }

    #[must_use]
    pub fn moved_to(self, position: Vector<3>) -> Piece {
        Piece { position, ..self }
    }

    /// The local face that currently points towards `direction`.
    ///
    /// # Panics
    ///
    /// The rotation must be a member of the cube rotation group, which holds
    /// for any piece built from quarter turns.
    #[must_use]
    pub fn local_face(&self, direction: Direction) -> Direction {
        // Row vector times rotation, i.e. the inverse rotation applied to the direction
        let local = &self.rotation.transpose() * &direction.vector();

        Direction::try_from(local).expect("piece rotations map canonical axes onto canonical axes")
    }

    /// The color of the sticker that currently faces `direction`.
    #[must_use]
    pub fn look(&self, direction: Direction) -> Color {
        self.colors[self.local_face(direction)]
    }
}
