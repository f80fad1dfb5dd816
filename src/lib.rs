//! Court rotation
//!
//! Assigns a fixed roster to doubles courts round after round, spreading out
//! partners and opponents and sharing rest fairly.
//!
//! - `schedule`: history counters, matchup scoring, the round planner and the
//!   multi-round driver
//! - `parser`: loads the player list
//! - `config`: run settings and weights
//! - `stats`, `display`, `export`: end-of-run statistics and output

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod parser;
pub mod schedule;
pub mod stats;

pub use config::SchedulerConfig;
pub use error::{ConfigError, ExportError, ScheduleError};
pub use parser::{load_roster, parse_roster, Roster};
