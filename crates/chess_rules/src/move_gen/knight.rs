//! Knight move generation
//!
//! Knights move in an L-shape: two squares in one direction, then one square
//! perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from central squares, as few as 2 in a corner
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::{generate_leaper_moves, MoveSet, Reach};
use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::position::Position;
use crate::types::Color;

/// Generate knight moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = MoveSet::new();
/// generate_knight_moves(&board, b1, Color::White, Reach::Moves, &mut moves);
/// // From the starting position: B1-A3 and B1-C3 (D2 holds a white pawn)
/// ```
pub(crate) fn generate_knight_moves(
    board: &Board,
    from: Position,
    color: Color,
    reach: Reach,
    moves: &mut MoveSet,
) {
    generate_leaper_moves(board, from, color, &KNIGHT_OFFSETS, reach, moves);
}
