//! Game lifecycle management
//!
//! Construction, reset and bulk board access.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Color;

/// One in-progress match: the live board and the side to move
///
/// Two games are equal when their boards match cell by cell and the same
/// side is to move.
///
/// The game does no locking. A host must route every mutating call for a
/// match through a single handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub(super) board: Board,
    pub(super) side_to_move: Color,
}

impl Game {
    /// Create a new game with the standard starting position, white to move
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    /// Create a game from an arbitrary board
    ///
    /// Non-standard material is accepted as is.
    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    /// Reset the game to the starting position, white to move
    pub fn reset(&mut self) {
        self.board.reset_board();
        self.side_to_move = Color::White;
    }

    /// The live board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the whole board, keeping the side to move
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set which side moves next
    ///
    /// For restoring a stored position; normal play flips the turn through
    /// [`make_move`](Self::make_move) only.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
