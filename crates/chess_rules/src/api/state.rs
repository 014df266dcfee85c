//! Game state queries
//!
//! Check, checkmate and stalemate are derived from the current board on
//! every call; nothing is cached or stored.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::game::Game;
use crate::move_gen::attack::is_king_attacked;
use crate::types::Color;

/// Outcome of the position for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Not in check, at least one legal move
    Playing,
    /// In check, at least one legal move
    Check,
    /// In check, no legal moves
    Checkmate,
    /// Not in check, no legal moves
    Stalemate,
}

impl GameStatus {
    /// Checkmate or stalemate
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// The winning color, given who was to move when this status was derived
    ///
    /// Only checkmate has a winner; stalemate is a draw.
    pub fn winner(self, side_to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(side_to_move.opponent()),
            _ => None,
        }
    }
}

impl Game {
    /// Is `color`'s king attacked by any opposing piece?
    ///
    /// A board with no king of that color is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }

    /// In check and no legal move across every piece of `color`
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Not in check and no legal move across every piece of `color`
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Status of the side to move
    pub fn status(&self) -> GameStatus {
        let color = self.side_to_move;
        let in_check = self.is_in_check(color);
        let status = match (in_check, self.has_any_legal_move(color)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Playing,
            (false, false) => GameStatus::Stalemate,
        };
        trace!("[RULES] Status for {}: {:?}", color, status);
        status
    }

    fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(pos, piece)| !self.legal_moves_of(pos, piece).is_empty())
    }
}
