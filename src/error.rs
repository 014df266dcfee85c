//! Error types for the referee host

use std::path::PathBuf;

use chess_rules::SnapshotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefereeError {
    /// Reading a moves file or snapshot failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The starting snapshot could not be decoded
    #[error("Invalid snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    /// Encoding the final report failed
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

pub type RefereeResult<T> = Result<T, RefereeError>;
