use std::path::PathBuf;

use thiserror::Error;

/// Problems with the inputs of a schedule run. Nothing is scheduled when one of these occurs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read player list {path}: {source}")]
    RosterUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("player list is empty")]
    EmptyRoster,

    #[error(
        "duplicate player name(s): {}. Please remove them or add a short surname.",
        .names.join(", ")
    )]
    DuplicatePlayers { names: Vec<String> },

    #[error("need at least {needed} players to fill one court, found {found}")]
    TooFewPlayers { found: usize, needed: usize },

    #[error("court size must be an even number of at least 2, got {0}")]
    InvalidCourtSize(usize),

    #[error("{field} must be at least 1")]
    ZeroLimit { field: &'static str },

    #[error("weight `{name}` must be a finite, non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("could not read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while planning a single round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(
        "round {round} cannot be played due to insufficient players (have {available}, need {needed})"
    )]
    InsufficientPlayers {
        round: u32,
        available: usize,
        needed: usize,
    },

    #[error("court size must be an even number of at least 2, got {0}")]
    InvalidCourtSize(usize),
}

impl ScheduleError {
    /// Whether later rounds could still succeed. The roster never changes during a run,
    /// so a round that cannot be filled means no later round can be either.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ScheduleError::InsufficientPlayers { .. } => false,
            ScheduleError::InvalidCourtSize(_) => false,
        }
    }
}

/// Failure while writing a schedule or statistics file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
