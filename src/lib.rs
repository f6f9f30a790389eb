#![warn(clippy::pedantic)]

//! The pieces and legal moves of a 3x3x3 Rubik's cube.
//!
//! A [`Cube3`] holds 27 [`Piece`]s on the lattice `{-1, 0, 1}³`. Moves are
//! exact quarter-turn rotations of a layer, and every move returns a new
//! snapshot. The visible stickers are read through an unfolded net, see
//! [`net`].

pub mod cube;
pub mod direction;
pub mod net;
pub mod num;
pub mod piece;

pub use cube::{Cube3, Layer, Move, MoveError, parse_moves};
pub use direction::{Direction, DirectionError};
pub use piece::{Color, ColorMap, Piece};
