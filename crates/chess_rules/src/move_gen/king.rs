//! King move generation
//!
//! Kings move one square in any direction. Squares attacked by the opponent
//! are still generated here; the game's legality filter removes them.
//! Castling is not part of these rules.

use super::{generate_leaper_moves, MoveSet, Reach};
use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::position::Position;
use crate::types::Color;

pub(crate) fn generate_king_moves(
    board: &Board,
    from: Position,
    color: Color,
    reach: Reach,
    moves: &mut MoveSet,
) {
    generate_leaper_moves(board, from, color, &KING_OFFSETS, reach, moves);
}
