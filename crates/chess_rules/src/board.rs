//! Board representation
//!
//! The board is a flat array of 64 optional pieces addressed by
//! `(rank - 1) * 8 + (file - 1)`. It is `Copy`: legality checking clones it
//! once per candidate move, and a clone shares nothing with its source.
//!
//! No material invariant is enforced. A board may hold any number of pieces
//! of any kind, including none.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_move::Move;
use crate::constants::BACK_RANK;
use crate::position::Position;
use crate::types::{Color, Occupancy, Piece, PieceKind};

const CELLS: usize = 64;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Position, Piece>", from = "BTreeMap<Position, Piece>")]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    /// An empty board
    pub const fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// A board in the standard starting position
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset_board();
        board
    }

    /// Place `piece` at `pos`, replacing any occupant
    #[inline]
    pub fn add_piece(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.index()] = Some(piece);
    }

    /// Clear `pos`, returning whatever stood there
    #[inline]
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()].take()
    }

    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()]
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// What `pos` holds from the point of view of `mover`
    #[inline]
    pub fn occupancy(&self, pos: Position, mover: Color) -> Occupancy {
        match self.cells[pos.index()] {
            None => Occupancy::Empty,
            Some(piece) if piece.color == mover => Occupancy::Own,
            Some(_) => Occupancy::Enemy,
        }
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        self.cells = [None; CELLS];
    }

    /// Set up the standard starting position
    ///
    /// Pawns fill ranks 2 and 7; rooks, knights, bishops, queen and king
    /// stand on ranks 1 and 8 with the queen on the D file and the king on E.
    pub fn reset_board(&mut self) {
        self.clear();
        for color in Color::ALL {
            let back_rank = color.back_rank();
            let pawn_rank = color.pawn_start_rank();
            for (file, kind) in (1..).zip(BACK_RANK) {
                if let Some(pos) = Position::new(back_rank, file) {
                    self.add_piece(pos, Piece::new(color, kind));
                }
                if let Some(pos) = Position::new(pawn_rank, file) {
                    self.add_piece(pos, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
    }

    /// Occupied squares in A1..H8 order
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|piece| (Position::from_index(index), piece)))
    }

    /// Squares holding pieces of `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Square of `color`'s king, scanning from A1
    ///
    /// Returns the first one found if a non-standard board holds several.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is_king_of(color))
            .map(|(pos, _)| pos)
    }

    /// Relocate the piece on `mv.start()` to `mv.end()`
    ///
    /// Captures whatever stood on the destination and swaps in the promotion
    /// piece when the move names one. Does not check legality; an empty start
    /// square leaves the board untouched.
    pub(crate) fn apply_move(&mut self, mv: &Move) -> Option<Piece> {
        let mover = self.remove_piece(mv.start())?;
        let placed = match mv.promotion() {
            Some(kind) => Piece::new(mover.color, kind),
            None => mover,
        };
        let captured = self.remove_piece(mv.end());
        self.add_piece(mv.end(), placed);
        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists occupied squares only, e.g. `{"A1": R, "E8": k}`
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.pieces()
                    .map(|(pos, piece)| (pos.to_string(), piece.to_string())),
            )
            .finish()
    }
}

impl From<Board> for BTreeMap<Position, Piece> {
    fn from(board: Board) -> Self {
        board.pieces().collect()
    }
}

impl From<BTreeMap<Position, Piece>> for Board {
    fn from(squares: BTreeMap<Position, Piece>) -> Self {
        squares.into_iter().collect()
    }
}

impl FromIterator<(Position, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Position, Piece)>>(iter: I) -> Self {
        let mut board = Board::new();
        for (pos, piece) in iter {
            board.add_piece(pos, piece);
        }
        board
    }
}
