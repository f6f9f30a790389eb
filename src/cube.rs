use std::{array, fmt::Display, str::FromStr};

use itertools::iproduct;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    direction::Direction,
    net::{self, CELLS, COLUMNS},
    num::Vector,
    piece::{Color, Piece},
};

/// The number of pieces in a 3x3x3 cube
pub const PIECE_COUNT: usize = 27;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("`{0}` is not a move; expected one of FBLRUD fblrud MSE xyz")]
    UnknownToken(char),
    #[error("Expected exactly one move token")]
    NotSingleToken,
}

/// Which planes perpendicular to the rotation axis take part in a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layer {
    /// The outer layer on the side the axis points to
    First,
    /// The plane through the center
    Middle,
    /// The outer layer together with the middle plane
    FirstMiddle,
    /// The whole cube
    All,
}

impl Layer {
    /// The inclusive range of lattice coordinates to scan along one axis,
    /// given the rotation axis' component `x` on that axis.
    ///
    /// Components of `0` mean the coordinate is not the rotation axis and is
    /// always scanned fully.
    fn range(self, x: i32) -> (i32, i32) {
        if x == 0 {
            return (-1, 1);
        }

        match self {
            Layer::First => (x, x),
            Layer::Middle => (0, 0),
            Layer::FirstMiddle => (x.min(0), x.max(0)),
            Layer::All => (-1, 1),
        }
    }
}

/// A quarter turn token.
///
/// Upper case letters turn a face, lower case letters turn a face together
/// with the adjacent middle slice, `M`, `S` and `E` turn a middle slice, and
/// `x`, `y` and `z` turn the whole cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Move {
    F,
    B,
    L,
    R,
    U,
    D,
    f,
    b,
    l,
    r,
    u,
    d,
    M,
    S,
    E,
    x,
    y,
    z,
}

impl Move {
    pub const ALL: [Self; 18] = {
        use Move::*;
        [F, B, L, R, U, D, f, b, l, r, u, d, M, S, E, x, y, z]
    };

    /// The face whose axis the move turns about.
    #[must_use]
    pub const fn axis(self) -> Direction {
        match self {
            Move::F | Move::f | Move::S | Move::z => Direction::Front,
            Move::B | Move::b => Direction::Back,
            Move::L | Move::l => Direction::Left,
            Move::R | Move::r | Move::M | Move::x => Direction::Right,
            Move::U | Move::u | Move::E | Move::y => Direction::Up,
            Move::D | Move::d => Direction::Down,
        }
    }

    #[must_use]
    pub const fn layer(self) -> Layer {
        match self {
            Move::F | Move::B | Move::L | Move::R | Move::U | Move::D => Layer::First,
            Move::f | Move::b | Move::l | Move::r | Move::u | Move::d => Layer::FirstMiddle,
            Move::M | Move::S | Move::E => Layer::Middle,
            Move::x | Move::y | Move::z => Layer::All,
        }
    }

    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Move::F => 'F',
            Move::B => 'B',
            Move::L => 'L',
            Move::R => 'R',
            Move::U => 'U',
            Move::D => 'D',
            Move::f => 'f',
            Move::b => 'b',
            Move::l => 'l',
            Move::r => 'r',
            Move::u => 'u',
            Move::d => 'd',
            Move::M => 'M',
            Move::S => 'S',
            Move::E => 'E',
            Move::x => 'x',
            Move::y => 'y',
            Move::z => 'z',
        }
    }
}

impl TryFrom<char> for Move {
    type Error = MoveError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Move::ALL
            .into_iter()
            .find(|mv| mv.token() == value)
            .ok_or(MoveError::UnknownToken(value))
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(token), None) => Move::try_from(token),
            _ => Err(MoveError::NotSingleToken),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Parse a string of move tokens. Whitespace between tokens is ignored.
///
/// # Errors
///
/// Returns the first character that is not a move token.
pub fn parse_moves(moves: &str) -> Result<Vec<Move>, MoveError> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Move::try_from)
        .collect()
}

/// The lattice id of a coordinate in `{-1, 0, 1}³`.
///
/// # Panics
///
/// The coordinate must lie on the lattice
#[must_use]
pub fn xyz_to_id(position: Vector<3>) -> usize {
    let [x, y, z] = position.into_inner();
    assert!(
        [x, y, z].iter().all(|v| (-1..=1).contains(v)),
        "{position:?} is not a lattice coordinate"
    );

    usize::try_from(x + y * 3 + z * 9 + 13).expect("lattice ids are non-negative")
}

/// The lattice coordinate of an id in `0..27`.
///
/// # Panics
///
/// The id must be less than 27
#[must_use]
pub fn id_to_xyz(id: usize) -> Vector<3> {
    assert!(id < PIECE_COUNT, "{id} is not a lattice id");
    let id = i32::try_from(id).expect("lattice ids fit in an i32");

    Vector::new([[id % 3 - 1, id / 3 % 3 - 1, id / 9 - 1]])
}

/// A 3x3x3 cube as a snapshot of 27 pieces indexed by lattice id.
///
/// Every move returns a new snapshot, so earlier states stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube3 {
    pieces: [Piece; PIECE_COUNT],
}

impl Default for Cube3 {
    fn default() -> Self {
        Cube3::solved()
    }
}

impl Cube3 {
    /// The solved cube with every piece unrotated at its natural position.
    #[must_use]
    pub fn solved() -> Cube3 {
        Cube3 {
            pieces: array::from_fn(|id| Piece::new(id_to_xyz(id))),
        }
    }

    /// Build a cube from an explicit piece array, indexed by lattice id.
    #[must_use]
    pub fn from_pieces(pieces: [Piece; PIECE_COUNT]) -> Cube3 {
        Cube3 { pieces }
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece; PIECE_COUNT] {
        &self.pieces
    }

    #[must_use]
    pub fn piece_at(&self, position: Vector<3>) -> &Piece {
        &self.pieces[xyz_to_id(position)]
    }

    /// An independent snapshot of this cube.
    #[must_use]
    pub fn copy(&self) -> Cube3 {
        Cube3 {
            pieces: self.pieces.map(|piece| piece.copy()),
        }
    }

    /// Turn the pieces selected by `layer` a clockwise quarter turn about `axis`.
    #[must_use]
    pub fn rotate_layer(&self, axis: Direction, layer: Layer) -> Cube3 {
        let turn = axis.turn();
        let [ax, ay, az] = axis.vector().into_inner();
        let span = |x| {
            let (l, r) = layer.range(x);
            l..=r
        };

        let mut res = self.copy();
        let mut written = [false; PIECE_COUNT];
        let mut moved = 0;

        for (x, y, z) in iproduct!(span(ax), span(ay), span(az)) {
            let from = Vector::new([[x, y, z]]);
            let to = turn * &from;
            let id = xyz_to_id(to);

            debug_assert!(!written[id], "two pieces turned onto {to:?}");
            written[id] = true;

            res.pieces[id] = self.pieces[xyz_to_id(from)].rotate(turn).moved_to(to);
            moved += 1;
        }

        // Turning the whole cube must permute every slot
        debug_assert!(layer != Layer::All || written.iter().all(|w| *w));

        trace!("Turned {moved} pieces about {axis} ({layer:?})");

        res
    }

    /// Apply a single move.
    #[must_use]
    pub fn rotate(&self, mv: Move) -> Cube3 {
        debug!("Applying {mv}");

        match mv.layer() {
            // Turn the whole cube, then turn the far face back
            Layer::FirstMiddle => self
                .rotate_layer(mv.axis(), Layer::All)
                .rotate_layer(mv.axis().opposite(), Layer::First),
            layer => self.rotate_layer(mv.axis(), layer),
        }
    }

    /// Apply moves from left to right.
    #[must_use]
    pub fn apply(&self, moves: &[Move]) -> Cube3 {
        moves.iter().fold(self.copy(), |cube, mv| cube.rotate(*mv))
    }

    /// Parse and apply a string of move tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if `moves` contains a character that is not a move
    /// token. Nothing is applied in that case.
    pub fn apply_str(&self, moves: &str) -> Result<Cube3, MoveError> {
        Ok(self.apply(&parse_moves(moves)?))
    }

    /// The color shown at a 1-based index of the unfolded net, or `None` where
    /// the net has no sticker.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        let sticker = net::sticker_at(index)?;
        Some(self.piece_at(sticker.position).look(sticker.facing))
    }

    /// Every sticker on the net with its 1-based index.
    pub fn stickers(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        (1..=CELLS).filter_map(|index| Some((index, self.color(index)?)))
    }

    /// Whether every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Direction::ALL.into_iter().all(|face| {
            let mut colors = self
                .stickers()
                .filter(|(index, _)| net::sticker_at(*index).is_some_and(|s| s.facing == face))
                .map(|(_, color)| color);

            colors
                .next()
                .is_some_and(|first| colors.all(|color| color == first))
        })
    }

    /// The net as 9 lines of 12 characters, using the first letter of each
    /// color and a space where there is no sticker.
    #[must_use]
    pub fn format(&self) -> String {
        let mut fmt = String::with_capacity(CELLS + net::ROWS);

        for index in 1..=CELLS {
            fmt.push(self.color(index).map_or(' ', Color::code));
            if index != CELLS && index % COLUMNS == 0 {
                fmt.push('\n');
            }
        }

        fmt
    }
}

impl Display for Cube3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{direction::Direction, num::Vector, piece::Color};

    use super::{Cube3, Layer, Move, MoveError, PIECE_COUNT, id_to_xyz, parse_moves, xyz_to_id};

    #[test]
    fn lattice_ids() {
        for id in 0..PIECE_COUNT {
            assert_eq!(xyz_to_id(id_to_xyz(id)), id);
        }
        assert_eq!(xyz_to_id(Vector::new([[-1, -1, -1]])), 0);
        assert_eq!(xyz_to_id(Vector::new([[0, 0, 0]])), 13);
        assert_eq!(xyz_to_id(Vector::new([[1, 1, 1]])), 26);
        assert_eq!(id_to_xyz(5), Vector::new([[1, 0, -1]]));
    }

    #[test]
    #[should_panic(expected = "is not a lattice coordinate")]
    fn off_lattice() {
        let _ = xyz_to_id(Vector::new([[2, 0, 0]]));
    }

    #[test]
    fn layer_ranges() {
        assert_eq!(Layer::First.range(1), (1, 1));
        assert_eq!(Layer::First.range(-1), (-1, -1));
        assert_eq!(Layer::Middle.range(-1), (0, 0));
        assert_eq!(Layer::FirstMiddle.range(1), (0, 1));
        assert_eq!(Layer::FirstMiddle.range(-1), (-1, 0));
        assert_eq!(Layer::All.range(1), (-1, 1));

        for layer in [Layer::First, Layer::Middle, Layer::FirstMiddle, Layer::All] {
            assert_eq!(layer.range(0), (-1, 1));
        }
    }

    #[test]
    fn tokens() {
        for mv in Move::ALL {
            assert_eq!(Move::try_from(mv.token()), Ok(mv));
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
        }

        assert_eq!(Move::ALL.iter().collect::<HashSet<_>>().len(), 18);
        assert_eq!(Move::try_from('Q'), Err(MoveError::UnknownToken('Q')));
        assert_eq!("FF".parse::<Move>(), Err(MoveError::NotSingleToken));
        assert_eq!("".parse::<Move>(), Err(MoveError::NotSingleToken));

        assert_eq!(
            parse_moves("R U r\tM x"),
            Ok(vec![Move::R, Move::U, Move::r, Move::M, Move::x])
        );
        assert_eq!(parse_moves("RU'"), Err(MoveError::UnknownToken('\'')));
        assert_eq!(parse_moves(""), Ok(vec![]));
    }

    #[test]
    fn axes() {
        assert_eq!(Move::M.axis(), Direction::Right);
        assert_eq!(Move::S.axis(), Direction::Front);
        assert_eq!(Move::E.axis(), Direction::Up);
        assert_eq!(Move::l.axis(), Direction::Left);
        assert_eq!(Move::y.layer(), Layer::All);
    }

    #[test]
    fn solved_cube() {
        let cube = Cube3::solved();

        assert_eq!(cube, Cube3::default());
        assert!(cube.is_solved());
        assert_eq!(cube.stickers().count(), 54);
        assert_eq!(cube.color(1), None);
        assert_eq!(cube.color(12 + 5), Some(Color::White));
        assert_eq!(cube.color(4 * 12 + 5), Some(Color::Green));

        for (id, piece) in cube.pieces().iter().enumerate() {
            assert_eq!(piece.position(), id_to_xyz(id));
        }
    }

    #[test]
    fn layer_turns_are_permutations() {
        let scrambled = Cube3::solved().apply(&[Move::R, Move::U, Move::f, Move::E]);

        for axis in Direction::ALL {
            for (layer, count) in [
                (Layer::First, 9),
                (Layer::Middle, 9),
                (Layer::FirstMiddle, 18),
                (Layer::All, 27),
            ] {
                let turned = scrambled.rotate_layer(axis, layer);

                let changed = turned
                    .pieces()
                    .iter()
                    .zip(scrambled.pieces())
                    .filter(|(a, b)| a.rotation() != b.rotation())
                    .count();
                assert_eq!(changed, count, "{axis} {layer:?}");

                for (id, piece) in turned.pieces().iter().enumerate() {
                    assert_eq!(piece.position(), id_to_xyz(id), "{axis} {layer:?}");
                }
            }
        }
    }

    #[test]
    fn wide_turn_is_first_and_middle() {
        let scrambled = Cube3::solved().apply(&[Move::R, Move::U, Move::F, Move::l]);

        for mv in [Move::f, Move::b, Move::l, Move::r, Move::u, Move::d] {
            assert_eq!(
                scrambled.rotate(mv),
                scrambled.rotate_layer(mv.axis(), Layer::FirstMiddle),
                "{mv}"
            );
        }
    }

    #[test]
    fn first_layer_leaves_rest_alone() {
        let cube = Cube3::solved().rotate(Move::R);

        for piece in cube.pieces() {
            let [_, y, _] = piece.position().into_inner();
            if y != 1 {
                assert_eq!(piece, Cube3::solved().piece_at(piece.position()));
            }
        }
    }

    #[test]
    fn snapshots_are_independent() {
        let before = Cube3::solved();
        let after = before.rotate(Move::F);

        assert_ne!(before, after);
        assert!(before.is_solved());
        assert!(!after.is_solved());

        let copy = after.copy();
        let turned = copy.rotate(Move::U);
        assert_eq!(copy, after);
        assert_ne!(turned, after);
    }
}
