//! Single-match referee host for [`chess_rules`]
//!
//! Funnels every submission for one match through a single handler, relays
//! rejections without touching the game, and reports the resulting snapshot
//! and status.

pub mod config;
pub mod error;
pub mod referee;

pub use config::{Cli, OutputFormat, RefereeConfig};
pub use error::{RefereeError, RefereeResult};
pub use referee::{run, Outcome, Referee, Report, Submission};
