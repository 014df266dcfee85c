//! Move values
//!
//! A [`Move`] is a start square, an end square and, only for a pawn reaching
//! its last rank, the kind it promotes to. Moves are produced by move
//! generation and consumed by [`Game::make_move`](crate::Game::make_move);
//! hosts can also build them from notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::position::Position;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    end: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    promotion: Option<PieceKind>,
}

impl Move {
    /// A move without promotion
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    /// A pawn move onto the last rank that promotes to `kind`
    #[inline]
    pub const fn with_promotion(start: Position, end: Position, kind: PieceKind) -> Self {
        Self {
            start,
            end,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

/// "E2E4", or "A7A8Q" for a promotion
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// Parses coordinate notation, case-insensitive
///
/// Accepts "e2e4", "E2-E4", "e2 e4", and a trailing promotion letter with an
/// optional '=' ("e7e8q", "E7E8=Q").
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if !compact.is_ascii() || !(4..=6).contains(&compact.len()) {
            return Err(ParseError::Move {
                input: s.to_string(),
            });
        }

        let start: Position = compact[0..2].parse().map_err(|_| ParseError::Move {
            input: s.to_string(),
        })?;
        let end: Position = compact[2..4].parse().map_err(|_| ParseError::Move {
            input: s.to_string(),
        })?;

        let suffix = compact[4..].strip_prefix('=').unwrap_or(&compact[4..]);
        let mut letters = suffix.chars();
        match (letters.next(), letters.next()) {
            (None, _) if compact.len() == 4 => Ok(Move::new(start, end)),
            (Some(letter), None) => match PieceKind::from_letter(letter) {
                Some(kind) if kind.is_promotion_target() => {
                    Ok(Move::with_promotion(start, end, kind))
                }
                _ => Err(ParseError::Promotion {
                    input: suffix.to_string(),
                }),
            },
            _ => Err(ParseError::Move {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_uses_square_notation() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "E2E4");
        assert_eq!(
            Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Knight).to_string(),
            "A7A8N"
        );
    }

    #[test]
    fn test_parse_accepts_common_spellings() {
        let expected = Move::new(sq("E2"), sq("E4"));
        for input in ["e2e4", "E2E4", "e2-e4", "E2 E4", " e2e4 "] {
            assert_eq!(input.parse::<Move>(), Ok(expected), "{input:?}");
        }

        let promotion = Move::with_promotion(sq("E7"), sq("E8"), PieceKind::Queen);
        for input in ["e7e8q", "E7E8Q", "e7e8=Q", "e7-e8=q"] {
            assert_eq!(input.parse::<Move>(), Ok(promotion), "{input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_promotion_piece() {
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(ParseError::Promotion {
                input: "k".to_string()
            })
        );
        assert_eq!(
            "e7e8=P".parse::<Move>(),
            Err(ParseError::Promotion {
                input: "P".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_moves() {
        for input in ["", "e2", "e2e", "e2e9", "z1a1", "e2e4qq", "e7e8=", "é2e4"] {
            assert!(
                matches!(input.parse::<Move>(), Err(ParseError::Move { .. })),
                "{input:?} should be a move notation error"
            );
        }
    }
}
