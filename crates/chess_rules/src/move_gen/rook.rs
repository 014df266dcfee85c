//! Rook move generation
//!
//! Rooks are sliding pieces that move along ranks and files until blocked.
//! Castling is not part of these rules.

use super::sliding;
use super::{MoveSet, Reach};
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::position::Position;
use crate::types::Color;

pub(crate) fn generate_rook_moves(
    board: &Board,
    from: Position,
    color: Color,
    reach: Reach,
    moves: &mut MoveSet,
) {
    sliding::generate_sliding_moves(board, from, color, &ROOK_DIRS, reach, moves);
}
