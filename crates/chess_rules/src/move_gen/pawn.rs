//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion on the last rank
//!
//! ## Pawn Movement Rules
//!
//! Let `d` be +1 for white and -1 for black.
//!
//! - **Forward push**: to (rank + d, file), only if that square is empty
//! - **Double push**: from the starting rank (2 for white, 7 for black) to
//!   (rank + 2d, file), only if both squares are empty
//! - **Captures**: to (rank + d, file ± 1), only if an enemy piece stands there
//! - **Promotion**: a destination on the last rank (8 for white, 1 for black)
//!   is emitted as four moves, one per queen, rook, bishop and knight
//! - **En passant**: not part of these rules
//!
//! ## Covered Squares
//!
//! A pawn threatens both forward diagonals whether or not anything stands on
//! them, so an empty diagonal still counts against an enemy king. Forward
//! pushes never threaten anything.

use super::{MoveSet, Reach};
use crate::board::Board;
use crate::chess_move::Move;
use crate::position::Position;
use crate::types::{Color, Occupancy, PieceKind};

/// Files a pawn captures towards
const CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Generate pawn moves (or covered squares) from a given square
///
/// # Arguments
///
/// * `board` - The board to read occupancy from
/// * `from` - Square the pawn stands on
/// * `color` - Color of the pawn
/// * `reach` - `Moves` for pushes and captures, `Covers` for threatened diagonals
/// * `moves` - Output set to add moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = MoveSet::new();
/// generate_pawn_moves(&board, e2, Color::White, Reach::Moves, &mut moves);
/// // From the starting position: E2-E3 and E2-E4
/// ```
pub(crate) fn generate_pawn_moves(
    board: &Board,
    from: Position,
    color: Color,
    reach: Reach,
    moves: &mut MoveSet,
) {
    let forward = color.forward();

    if reach == Reach::Covers {
        for files in CAPTURE_FILES {
            if let Some(to) = from.offset(forward, files) {
                moves.insert(Move::new(from, to));
            }
        }
        return;
    }

    // Forward pushes
    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            push_pawn_move(from, one, color, moves);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        push_pawn_move(from, two, color, moves);
                    }
                }
            }
        }
    }

    // Diagonal captures
    for files in CAPTURE_FILES {
        if let Some(to) = from.offset(forward, files) {
            if board.occupancy(to, color) == Occupancy::Enemy {
                push_pawn_move(from, to, color, moves);
            }
        }
    }
}

/// Add a pawn move, expanding it into the four promotions on the last rank
fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut MoveSet) {
    if to.rank() == color.promotion_rank() {
        moves.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        moves.insert(Move::new(from, to));
    }
}
