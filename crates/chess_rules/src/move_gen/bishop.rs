//! Bishop move generation
//!
//! Bishops are sliding pieces that move diagonally until blocked by another
//! piece or the board edge.
//!
//! ## Bishop Movement Rules
//!
//! - Bishops move diagonally (any number of squares)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::sliding;
use super::{MoveSet, Reach};
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::position::Position;
use crate::types::Color;

/// Generate bishop moves from a given square
///
/// Delegates to the common sliding logic with the four diagonal directions.
pub(crate) fn generate_bishop_moves(
    board: &Board,
    from: Position,
    color: Color,
    reach: Reach,
    moves: &mut MoveSet,
) {
    sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, reach, moves);
}
