//! Error types for the rules engine
//!
//! `InvalidMove` is the only error a move submission can produce. Notation
//! parsing and snapshot decoding have their own error families so hosts can
//! tell malformed input apart from an illegal move.

use thiserror::Error;

use crate::chess_move::Move;
use crate::position::Position;
use crate::types::Color;

/// Rejection of a submitted move
///
/// Returned by [`Game::make_move`](crate::Game::make_move). A rejected move
/// never mutates the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    /// No piece at the start square
    #[error("Invalid move {mv}: no piece at {square}")]
    NoPiece { mv: Move, square: Position },

    /// Piece belongs to the side that is not to move
    #[error("Invalid move {mv}: piece at {square} is {color}, but {to_move} is to move")]
    OutOfTurn {
        mv: Move,
        square: Position,
        color: Color,
        to_move: Color,
    },

    /// Move is not in the legal set for its start square
    #[error("Invalid move {mv}: not a legal move")]
    Illegal { mv: Move },
}

impl InvalidMove {
    /// The move that was rejected
    pub fn mv(&self) -> Move {
        match self {
            InvalidMove::NoPiece { mv, .. }
            | InvalidMove::OutOfTurn { mv, .. }
            | InvalidMove::Illegal { mv } => *mv,
        }
    }
}

/// Result type alias for move submission
pub type MoveResult<T> = Result<T, InvalidMove>;

/// Malformed notation supplied by a host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Square notation outside "A1".."H8"
    #[error("Invalid square notation: {input:?} (expected A1..H8)")]
    Square { input: String },

    /// Move notation that is not start square, end square and optional promotion
    #[error("Invalid move notation: {input:?}")]
    Move { input: String },

    /// Promotion letter other than Q, R, B or N
    #[error("Invalid promotion piece: {input:?} (expected Q, R, B or N)")]
    Promotion { input: String },
}

/// Errors while encoding or decoding a game snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// JSON encoding/decoding failure
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;
