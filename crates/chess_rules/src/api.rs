//! Public game API
//!
//! The [`Game`] owns one board and the side to move, and is the only place
//! that mutates a live board. Hosts construct a game, ask for legal moves,
//! submit moves and query the outcome.
//!
//! ## Module Organization
//!
//! - `game` - Construction, board access and snapshots of state (new, set_board)
//! - `moves` - Legality filtering and move execution (valid_moves, make_move)
//! - `state` - Derived outcome queries (is_in_check, is_in_checkmate, status)
//!
//! ## State Machine
//!
//! The only stored state is the board and the side to move. Check,
//! checkmate and stalemate are derived on demand; the engine has no terminal
//! state and never refuses further calls. Hosts decide when a match is over.

mod game;
mod moves;
mod state;


pub use game::Game;
pub use state::GameStatus;
