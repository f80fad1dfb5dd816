use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::ConfigError;
use crate::schedule::Player;

/// Ordered list of unique player names. Only built through [`Roster::new`],
/// which rejects empty lists and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster(Vec<Player>);

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, ConfigError> {
        if players.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for player in &players {
            *counts.entry(player.as_str()).or_insert(0) += 1;
        }
        // Report duplicates in the order they first appear
        let mut duplicates: Vec<String> = Vec::new();
        for player in &players {
            let repeated = counts.get(player.as_str()).copied().unwrap_or(0) > 1;
            if repeated && !duplicates.contains(player) {
                duplicates.push(player.clone());
            }
        }
        if !duplicates.is_empty() {
            return Err(ConfigError::DuplicatePlayers { names: duplicates });
        }

        Ok(Roster(players))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn names(&self) -> &[Player] {
        &self.0
    }

    /// Fails unless there are enough players for at least one court
    pub fn check_playable(&self, court_size: usize) -> Result<(), ConfigError> {
        if self.len() < court_size {
            return Err(ConfigError::TooFewPlayers {
                found: self.len(),
                needed: court_size,
            });
        }
        Ok(())
    }
}

/// Parses one name per line. Names are trimmed and blank lines skipped.
pub fn parse_roster(text: &str) -> Result<Roster, ConfigError> {
    let players: Vec<Player> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Roster::new(players)
}

/// Loads a roster from a text file with one player name per line
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::RosterUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&text)?;
    info!("Loaded {} players from {}", roster.len(), path.display());
    Ok(roster)
}
