//! Command-line configuration
//!
//! [`Cli`] is the clap surface; [`RefereeConfig`] is what the library works
//! with once files have been read.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::error::{RefereeError, RefereeResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Moves to submit in order, e.g. e2e4 E7-E5 a7a8q
    pub moves: Vec<String>,

    /// File of whitespace-separated moves, submitted before MOVES
    #[arg(long)]
    pub moves_file: Option<PathBuf>,

    /// Start from a JSON snapshot instead of a fresh game
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Stop at the first submission that is not accepted
    #[arg(long)]
    pub stop_on_invalid: bool,

    /// Rendering of the final report
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Tracing filter, overrides RUST_LOG (e.g. "debug", "chess_rules=trace")
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Pretty,
}

/// Validated referee settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefereeConfig {
    /// Move notations, file contents first
    pub moves: Vec<String>,
    pub snapshot: Option<PathBuf>,
    pub stop_on_invalid: bool,
    pub format: OutputFormat,
}

impl Cli {
    /// Read the moves file (if any) and build the config
    pub fn into_config(self) -> RefereeResult<RefereeConfig> {
        let mut moves = match &self.moves_file {
            Some(path) => read_moves_file(path)?,
            None => Vec::new(),
        };
        moves.extend(self.moves);

        Ok(RefereeConfig {
            moves,
            snapshot: self.snapshot,
            stop_on_invalid: self.stop_on_invalid,
            format: self.format,
        })
    }
}

fn read_moves_file(path: &Path) -> RefereeResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| RefereeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
