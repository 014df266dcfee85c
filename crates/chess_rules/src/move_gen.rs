//! Per-piece movement geometry
//!
//! Every piece answers two questions about the current board:
//!
//! - [`Piece::piece_moves`] - pseudo-legal moves: consistent with the piece's
//!   geometry and square occupancy, ignoring king safety.
//! - [`Piece::covered_squares`] - squares the piece threatens, including
//!   squares held by its own side. Only used for attack detection, never to
//!   decide where the piece itself may go.
//!
//! Both are produced by the same generators, parameterised by [`Reach`], and
//! selected by one exhaustive match on [`PieceKind`].
//!
//! ## Module Organization
//!
//! - `sliding` - Shared ray walking for bishops, rooks and queens
//! - `bishop`, `rook`, `queen` - Direction sets for the sliders
//! - `knight`, `king` - Fixed-offset leapers
//! - `pawn` - Pushes, double pushes, captures and promotion
//! - `attack` - Attacked-square and king-safety predicates

pub mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::board::Board;
use crate::chess_move::Move;
use crate::constants::Direction;
use crate::position::Position;
use crate::types::{Color, Occupancy, Piece, PieceKind};

/// A set of moves, ordered by start, end, then promotion kind
pub type MoveSet = BTreeSet<Move>;

/// Which squares a generator reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reach {
    /// Destinations the piece may move to: empty or enemy-occupied
    Moves,
    /// Squares the piece threatens, own-occupied squares included
    Covers,
}

impl Reach {
    /// Whether a square with this occupancy is reported
    ///
    /// Own-occupied squares are covered but never moved to.
    #[inline]
    pub(crate) fn includes(self, occupancy: Occupancy) -> bool {
        match occupancy {
            Occupancy::Empty | Occupancy::Enemy => true,
            Occupancy::Own => self == Reach::Covers,
        }
    }
}

impl Piece {
    /// Pseudo-legal moves for this piece standing on `from`
    ///
    /// Never targets a square held by this piece's own color. King safety is
    /// not considered; see [`Game::valid_moves`](crate::Game::valid_moves).
    pub fn piece_moves(&self, board: &Board, from: Position) -> MoveSet {
        self.generate(board, from, Reach::Moves)
    }

    /// Squares this piece threatens from `from`, as moves ending on them
    ///
    /// Includes squares held by its own color. Pawns cover both forward
    /// diagonals whether or not anything stands there, and nothing else.
    pub fn covered_squares(&self, board: &Board, from: Position) -> MoveSet {
        self.generate(board, from, Reach::Covers)
    }

    fn generate(&self, board: &Board, from: Position, reach: Reach) -> MoveSet {
        let mut moves = MoveSet::new();
        match self.kind {
            PieceKind::King => king::generate_king_moves(board, from, self.color, reach, &mut moves),
            PieceKind::Queen => {
                queen::generate_queen_moves(board, from, self.color, reach, &mut moves)
            }
            PieceKind::Rook => rook::generate_rook_moves(board, from, self.color, reach, &mut moves),
            PieceKind::Bishop => {
                bishop::generate_bishop_moves(board, from, self.color, reach, &mut moves)
            }
            PieceKind::Knight => {
                knight::generate_knight_moves(board, from, self.color, reach, &mut moves)
            }
            PieceKind::Pawn => pawn::generate_pawn_moves(board, from, self.color, reach, &mut moves),
        }
        moves
    }
}

/// Single-step generation shared by knights and kings
///
/// Each offset is tried once; off-board targets are skipped and the rest are
/// kept according to `reach`.
pub(crate) fn generate_leaper_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[Direction],
    reach: Reach,
    moves: &mut MoveSet,
) {
    for &(ranks, files) in offsets {
        let Some(to) = from.offset(ranks, files) else {
            continue;
        };
        if reach.includes(board.occupancy(to, color)) {
            moves.insert(Move::new(from, to));
        }
    }
}
