//! Attack detection and king safety
//!
//! Provides the predicates the game's legality filter is built on.
//!
//! ## Algorithm
//!
//! A square is attacked when it appears among the covered squares of any
//! piece of the attacking color. Every attacker's geometry is computed on the
//! board as given, so blockers are respected exactly as in move generation.
//!
//! King safety for a candidate move is decided on a copy of the board: the
//! move is applied to the copy, the mover's king is located on the copy, and
//! the copy is scanned for attacks on that square. The live board is never
//! touched.
//!
//! ## Performance
//!
//! One check is O(pieces x covered squares). A legality pass over one
//! square's candidates costs one board copy and one full scan per candidate.

use crate::board::Board;
use crate::chess_move::Move;
use crate::position::Position;
use crate::types::Color;

/// Check if `square` is attacked by any piece of `by_color`
///
/// # Examples
///
/// ```rust
/// use chess_rules::move_gen::attack::is_square_attacked;
/// use chess_rules::{Board, Color, Position};
///
/// let board = Board::standard();
/// let f3: Position = "F3".parse().unwrap();
/// let e5: Position = "E5".parse().unwrap();
///
/// // G1 knight and E2/G2 pawns cover F3
/// assert!(is_square_attacked(&board, f3, Color::White));
/// assert!(!is_square_attacked(&board, e5, Color::White));
/// ```
pub fn is_square_attacked(board: &Board, square: Position, by_color: Color) -> bool {
    board.pieces_of(by_color).any(|(from, piece)| {
        piece
            .covered_squares(board, from)
            .iter()
            .any(|covered| covered.end() == square)
    })
}

/// Check if `color`'s king stands on an attacked square
///
/// A board without a king of that color is never in check.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

/// Would playing `mv` leave the mover's own king attacked?
///
/// Applies `mv` to a scratch copy of `board`; `mover` is the color of the
/// piece on `mv.start()`.
pub fn leaves_king_attacked(board: &Board, mv: &Move, mover: Color) -> bool {
    let mut scratch = *board;
    scratch.apply_move(mv);
    is_king_attacked(&scratch, mover)
}
