//! JSON snapshots of a game
//!
//! A snapshot holds the occupied squares keyed by their "E2" notation plus
//! the side to move:
//!
//! ```json
//! {"board":{"E1":{"color":"WHITE","kind":"KING"}},"side_to_move":"BLACK"}
//! ```
//!
//! Empty squares are implied by absence, so two snapshots of equal games
//! decode to equal values regardless of key order.

use crate::api::Game;
use crate::error::SnapshotResult;

/// Encode `game` as compact JSON
pub fn to_json(game: &Game) -> SnapshotResult<String> {
    Ok(serde_json::to_string(game)?)
}

/// Encode `game` as indented JSON
pub fn to_json_pretty(game: &Game) -> SnapshotResult<String> {
    Ok(serde_json::to_string_pretty(game)?)
}

/// Decode a game previously produced by [`to_json`] or [`to_json_pretty`]
///
/// # Errors
///
/// Fails on malformed JSON, unknown colors or piece kinds, and square keys
/// outside "A1".."H8".
pub fn from_json(json: &str) -> SnapshotResult<Game> {
    Ok(serde_json::from_str(json)?)
}
