//! Board squares
//!
//! A [`Position`] is a (rank, file) pair in the 1..8 x 1..8 lattice. Ranks
//! count up from white's side, files count A..H left to right from white's
//! side. Out-of-range positions cannot be constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::ParseError;

/// A square on the board, 1-indexed
///
/// Serialized as its notation ("E2"), which also makes it usable as a JSON map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Create a position, or `None` when rank or file is outside 1..=8
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank >= 1 && rank <= BOARD_SIZE && file >= 1 && file <= BOARD_SIZE {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    /// The square `ranks`/`files` away, or `None` past the board edge
    #[inline]
    pub fn offset(self, ranks: i8, files: i8) -> Option<Self> {
        let rank = self.rank as i8 + ranks;
        let file = self.file as i8 + files;
        if rank < 1 || file < 1 {
            return None;
        }
        Self::new(rank as u8, file as u8)
    }

    /// Linear cell index (0-63), rank-major from A1
    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.rank as usize - 1) * BOARD_SIZE as usize + (self.file as usize - 1)
    }

    /// Inverse of [`index`](Self::index); `index` must be below 64
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        let size = BOARD_SIZE as usize;
        Self {
            rank: (index / size) as u8 + 1,
            file: (index % size) as u8 + 1,
        }
    }

    /// All 64 squares, A1, B1, ..., H8
    pub fn all() -> impl Iterator<Item = Position> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(Position::from_index)
    }

    /// File letter, 'A'..='H'
    pub fn file_letter(self) -> char {
        (b'A' + self.file - 1) as char
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}

/// Parses "E2" or "e2"; anything else is a [`ParseError::Square`]
impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Square {
            input: s.to_string(),
        };

        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = bytes[0].to_ascii_uppercase();
        let rank = bytes[1];
        if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Position::new(rank - b'0', file - b'A' + 1).ok_or_else(invalid)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

impl TryFrom<String> for Position {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
