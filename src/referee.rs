//! Match referee
//!
//! The referee is the single serialized handler for one match: every
//! submission passes through [`Referee::submit`] in order, so the engine
//! never sees two mutating calls at once.
//!
//! ## Submission flow
//!
//! 1. Notation is parsed; malformed input never reaches the engine
//! 2. Once the game is over (checkmate or stalemate) further submissions are
//!    refused without consulting the engine
//! 3. Otherwise the move goes to [`Game::make_move`]; a rejection is relayed
//!    back and the game is untouched
//! 4. After an accepted move the status for the next side is derived and
//!    recorded alongside the move

use std::fmt;
use std::fs;

use chess_rules::{snapshot, Color, Game, GameStatus, Move, Piece};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::RefereeConfig;
use crate::error::{RefereeError, RefereeResult};

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Applied; the side to move has flipped
    Accepted {
        #[serde(rename = "move")]
        mv: Move,
        #[serde(skip_serializing_if = "Option::is_none")]
        captured: Option<Piece>,
        /// Status for the side now to move
        status: GameStatus,
    },
    /// Refused by the engine
    Rejected { reason: String },
    /// Notation could not be parsed
    Malformed { reason: String },
    /// Submitted after checkmate or stalemate
    GameOver { status: GameStatus },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// 1-based order of submission
    pub index: usize,
    pub notation: String,
    /// Side to move when the submission arrived
    pub side: Color,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Final state of a refereed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub submissions: Vec<Submission>,
    pub status: GameStatus,
    pub side_to_move: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,
    pub game: Game,
}

impl Report {
    pub fn accepted(&self) -> usize {
        self.submissions
            .iter()
            .filter(|s| s.outcome.is_accepted())
            .count()
    }

    pub fn refused(&self) -> usize {
        self.submissions.len() - self.accepted()
    }

    pub fn to_json(&self) -> RefereeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.submissions {
            write!(f, "{:>3}. {:<6} {:<9}", s.index, s.side, s.notation)?;
            match &s.outcome {
                Outcome::Accepted {
                    mv,
                    captured,
                    status,
                } => {
                    write!(f, "accepted {}", mv)?;
                    if let Some(piece) = captured {
                        write!(f, " x{}", piece)?;
                    }
                    if *status != GameStatus::Playing {
                        write!(f, " ({:?})", status)?;
                    }
                    writeln!(f)?;
                }
                Outcome::Rejected { reason } => writeln!(f, "rejected: {}", reason)?,
                Outcome::Malformed { reason } => writeln!(f, "malformed: {}", reason)?,
                Outcome::GameOver { status } => writeln!(f, "refused: game over ({:?})", status)?,
            }
        }

        writeln!(
            f,
            "{} accepted, {} refused",
            self.accepted(),
            self.refused()
        )?;
        match self.status {
            GameStatus::Checkmate => writeln!(
                f,
                "Checkmate, {} wins",
                self.winner.unwrap_or(self.side_to_move.opponent())
            ),
            GameStatus::Stalemate => writeln!(f, "Stalemate, draw"),
            GameStatus::Check => writeln!(f, "{} to move, in check", self.side_to_move),
            GameStatus::Playing => writeln!(f, "{} to move", self.side_to_move),
        }
    }
}

/// Serialized handler for one match
#[derive(Debug, Clone, Default)]
pub struct Referee {
    game: Game,
    submissions: Vec<Submission>,
}

impl Referee {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            submissions: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Submit one move in text notation and record the outcome
    pub fn submit(&mut self, notation: &str) -> &Submission {
        let side = self.game.side_to_move();
        let outcome = match notation.parse::<Move>() {
            Ok(mv) => self.submit_move(mv),
            Err(err) => {
                warn!("[REFEREE] Malformed submission {:?}: {}", notation, err);
                Outcome::Malformed {
                    reason: err.to_string(),
                }
            }
        };

        self.submissions.push(Submission {
            index: self.submissions.len() + 1,
            notation: notation.to_string(),
            side,
            outcome,
        });
        &self.submissions[self.submissions.len() - 1]
    }

    fn submit_move(&mut self, mv: Move) -> Outcome {
        let current = self.game.status();
        if current.is_game_over() {
            debug!("[REFEREE] Ignoring {} after {:?}", mv, current);
            return Outcome::GameOver { status: current };
        }

        let side = self.game.side_to_move();
        match self.game.make_move(mv) {
            Ok(captured) => {
                let status = self.game.status();
                info!("[REFEREE] {} plays {}", side, mv);
                match status {
                    GameStatus::Checkmate => {
                        info!("[REFEREE] Checkmate, {} wins", side)
                    }
                    GameStatus::Stalemate => info!("[REFEREE] Stalemate"),
                    GameStatus::Check => {
                        info!("[REFEREE] {} is in check", self.game.side_to_move())
                    }
                    GameStatus::Playing => {}
                }
                Outcome::Accepted {
                    mv,
                    captured,
                    status,
                }
            }
            Err(err) => {
                warn!("[REFEREE] {}", err);
                Outcome::Rejected {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Summarize the match as it stands
    pub fn report(&self) -> Report {
        let status = self.game.status();
        Report {
            submissions: self.submissions.clone(),
            status,
            side_to_move: self.game.side_to_move(),
            winner: status.winner(self.game.side_to_move()),
            game: self.game.clone(),
        }
    }
}

/// Load the starting game, play every configured move and report
pub fn run(config: &RefereeConfig) -> RefereeResult<Report> {
    let game = match &config.snapshot {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| RefereeError::Io {
                path: path.clone(),
                source,
            })?;
            let game = snapshot::from_json(&json).map_err(|source| RefereeError::Snapshot {
                path: path.clone(),
                source,
            })?;
            info!(
                "[REFEREE] Loaded snapshot {}, {} to move",
                path.display(),
                game.side_to_move()
            );
            game
        }
        None => Game::new(),
    };

    let mut referee = Referee::new(game);
    for notation in &config.moves {
        let accepted = referee.submit(notation).outcome.is_accepted();
        if !accepted && config.stop_on_invalid {
            warn!("[REFEREE] Stopping at submission {:?}", notation);
            break;
        }
    }

    Ok(referee.report())
}
