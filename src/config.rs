use std::fs;
use std::path::Path;

use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schedule::{RoundPlanner, Weights};

/// Settings for one schedule run. Every field is optional in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_max_courts")]
    pub max_courts: usize,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    #[serde(default = "default_court_size")]
    pub court_size: usize,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub print_stats: bool,
    /// Seed for the rest tie-break; `None` means one is drawn at run start
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_courts() -> usize {
    4
}
fn default_max_rounds() -> u32 {
    10
}
fn default_court_size() -> usize {
    4
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            max_courts: default_max_courts(),
            max_rounds: default_max_rounds(),
            court_size: default_court_size(),
            weights: Weights::default(),
            print_stats: false,
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Reads a JSON config file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.court_size < 2 || self.court_size % 2 != 0 {
            return Err(ConfigError::InvalidCourtSize(self.court_size));
        }
        if self.max_courts == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_courts" });
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_rounds" });
        }
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if !self.weights.keeps_priority_order() {
            warn!(
                "Weights {:?} no longer rank partner > opponent > balance > new interaction",
                self.weights
            );
        }
        Ok(())
    }

    pub fn planner(&self) -> RoundPlanner {
        RoundPlanner::new(self.max_courts, self.court_size, self.weights)
    }

    /// Returns the configured seed, drawing and storing a fresh one if none was set,
    /// so every run can be reproduced from its logged or exported config
    pub fn resolve_seed(&mut self) -> u64 {
        *self.seed.get_or_insert_with(rand::random)
    }

    /// Generator for the rest tie-break, built from the (resolved) seed
    pub fn rng(&mut self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.resolve_seed())
    }
}
