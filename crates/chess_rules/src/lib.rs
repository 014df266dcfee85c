//! Chess rules engine for two-player matches
//!
//! Owns board state, generates legal moves, enforces turn order and detects
//! check, checkmate and stalemate. A match server consults a [`Game`] before
//! accepting or rejecting a player's move.
//!
//! ## Module Organization
//!
//! - `types` - Colors, piece kinds, pieces and occupancy
//! - `position` - Squares in the 1..8 x 1..8 lattice and their "E2" notation
//! - `chess_move` - Start/end/promotion move values
//! - `board` - The 64-cell board
//! - `move_gen` - Per-piece movement geometry (pseudo-legal moves, covered squares)
//! - `api` - The [`Game`] state machine (legality filtering, turn order, status queries)
//! - `snapshot` - JSON snapshots for persistence and broadcast layers
//!
//! ## Example
//!
//! ```rust
//! use chess_rules::{Game, Move, Position};
//!
//! let mut game = Game::new();
//! let e2: Position = "E2".parse().unwrap();
//! let e4: Position = "E4".parse().unwrap();
//!
//! game.make_move(Move::new(e2, e4)).unwrap();
//! assert!(game.board().get_piece(e2).is_none());
//! ```

pub mod api;
pub mod board;
pub mod chess_move;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod position;
pub mod snapshot;
pub mod types;

pub use api::{Game, GameStatus};
pub use board::Board;
pub use chess_move::Move;
pub use error::{InvalidMove, MoveResult, ParseError, SnapshotError, SnapshotResult};
pub use move_gen::MoveSet;
pub use position::Position;
pub use types::{Color, Occupancy, Piece, PieceKind};
