//! Board dimensions and movement direction vectors
//!
//! Directions are (rank delta, file delta) pairs in board coordinates, so a
//! step never wraps around an edge: [`Position::offset`](crate::Position::offset)
//! returns `None` as soon as a step leaves the 1..8 range.
//!
//! - **Orthogonal** (rook): N (+1, 0), S (-1, 0), E (0, +1), W (0, -1)
//! - **Diagonal** (bishop): NE, NW, SE, SW
//! - **Knight**: every (±1, ±2) and (±2, ±1) jump
//! - **King**: the eight adjacent squares

use crate::types::PieceKind;

/// Squares per rank and per file
pub const BOARD_SIZE: u8 = 8;

/// A (rank delta, file delta) step
pub type Direction = (i8, i8);

pub const ROOK_DIRS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [Direction; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [Direction; 8] = QUEEN_DIRS;

/// Back-rank layout from file A to file H
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Number of pieces each side starts with
pub const STARTING_PIECES_PER_SIDE: usize = 16;

