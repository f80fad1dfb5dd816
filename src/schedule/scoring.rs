use serde::{Deserialize, Serialize};

use super::history::HistoryStore;
use super::types::Player;

/// Tunable weights for [`score_matchup`].
///
/// The defaults keep the ordering partner > opponent > balance > new interaction,
/// so avoiding a repeat partnership outweighs everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_partner")]
    pub partner: f64,
    #[serde(default = "default_opponent")]
    pub opponent: f64,
    #[serde(default = "default_balance")]
    pub balance: f64,
    #[serde(default = "default_new_interaction")]
    pub new_interaction: f64,
}

fn default_partner() -> f64 {
    1000.0
}
fn default_opponent() -> f64 {
    500.0
}
fn default_balance() -> f64 {
    200.0
}
fn default_new_interaction() -> f64 {
    100.0
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            partner: default_partner(),
            opponent: default_opponent(),
            balance: default_balance(),
            new_interaction: default_new_interaction(),
        }
    }
}

impl Weights {
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("partner", self.partner),
            ("opponent", self.opponent),
            ("balance", self.balance),
            ("new_interaction", self.new_interaction),
        ]
    }

    /// True when partner > opponent > balance > new interaction
    pub fn keeps_priority_order(&self) -> bool {
        self.partner > self.opponent
            && self.opponent > self.balance
            && self.balance > self.new_interaction
    }
}

/// Desirability of putting `team1` against `team2` given the history so far. Higher is better.
pub fn score_matchup(
    team1: &[Player],
    team2: &[Player],
    history: &HistoryStore,
    weights: &Weights,
) -> f64 {
    let mut score = 0.0;

    // Repeat partnerships
    for team in [team1, team2] {
        for (i, a) in team.iter().enumerate() {
            for b in &team[i + 1..] {
                score -= weights.partner * history.partner_count(a, b) as f64;
            }
        }
    }

    // Repeat oppositions, and a bonus for first meetings
    for a in team1 {
        for b in team2 {
            let met = history.opponent_count(a, b);
            score -= weights.opponent * met as f64;
            if met == 0 {
                score += weights.new_interaction;
            }
        }
    }

    let games = |team: &[Player]| -> i64 {
        team.iter().map(|p| history.games_played(p) as i64).sum()
    };
    score -= weights.balance * (games(team1) - games(team2)).abs() as f64;

    score
}
