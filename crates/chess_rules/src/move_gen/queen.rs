//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.
//!
//! ## Queen Movement Rules
//!
//! - Queens move like bishops (diagonally) OR rooks (along ranks and files)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::{bishop, rook};
use super::{MoveSet, Reach};
use crate::board::Board;
use crate::position::Position;
use crate::types::Color;

/// Generate queen moves from a given square
///
/// The union of the bishop and rook rays; the two never share a square, so
/// nothing is reported twice.
pub(crate) fn generate_queen_moves(
    board: &Board,
    from: Position,
    color: Color,
    reach: Reach,
    moves: &mut MoveSet,
) {
    bishop::generate_bishop_moves(board, from, color, reach, moves);
    rook::generate_rook_moves(board, from, color, reach, moves);
}
