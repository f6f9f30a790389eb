use std::{f64::consts::FRAC_PI_2, fmt::Display, sync::LazyLock};

use thiserror::Error;

use crate::num::{Matrix, Vector, rotation_about};

// X points out of the front face, Y out of the right face, and Z out of the up face
// The coordinate system is right-handed

/// One of the six canonical unit vectors. Used both as a rotation axis and as
/// a face label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    #[error("The vector {0:?} is not one of the six canonical unit vectors")]
    NotCanonical([i32; 3]),
}

/// Clockwise quarter turns about each direction, as seen from outside the cube
/// looking back along the axis. Indexed by `Direction as usize`.
static TURNS: LazyLock<[Matrix<3, 3>; 6]> =
    LazyLock::new(|| Direction::ALL.map(|direction| rotation_about(&direction.vector(), -FRAC_PI_2)));

impl Direction {
    pub const ALL: [Self; 6] = {
        use Direction::*;
        let v = [Front, Back, Left, Right, Up, Down];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn vector(self) -> Vector<3> {
        Vector::new([match self {
            Direction::Front => [1, 0, 0],
            Direction::Back => [-1, 0, 0],
            Direction::Left => [0, -1, 0],
            Direction::Right => [0, 1, 0],
            Direction::Up => [0, 0, 1],
            Direction::Down => [0, 0, -1],
        }])
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The integer matrix of a clockwise quarter turn about this direction.
    #[must_use]
    pub fn turn(self) -> &'static Matrix<3, 3> {
        &TURNS[self as usize]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Front => "front",
            Direction::Back => "back",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl TryFrom<Vector<3>> for Direction {
    type Error = DirectionError;

    fn try_from(value: Vector<3>) -> Result<Self, Self::Error> {
        Ok(match value.into_inner() {
            [1, 0, 0] => Direction::Front,
            [-1, 0, 0] => Direction::Back,
            [0, -1, 0] => Direction::Left,
            [0, 1, 0] => Direction::Right,
            [0, 0, 1] => Direction::Up,
            [0, 0, -1] => Direction::Down,
            other => return Err(DirectionError::NotCanonical(other)),
        })
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
