use serde::{Deserialize, Serialize};

/// A player is identified by their (unique) name
pub type Player = String;

/// Players sharing one side of a court
pub type Team = Vec<Player>;

/// Unordered pair of players, stored with the smaller name first so that
/// (a, b) and (b, a) always land on the same key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(Player, Player);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            PairKey(a.to_string(), b.to_string())
        } else {
            PairKey(b.to_string(), a.to_string())
        }
    }

    /// Returns the other member of the pair, if `player` is part of it
    pub fn other(&self, player: &str) -> Option<&str> {
        if self.0 == player {
            Some(self.1.as_str())
        } else if self.1 == player {
            Some(self.0.as_str())
        } else {
            None
        }
    }
}

/// One court's match in a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtAssignment {
    pub court: usize, // 1-based
    pub team1: Team,
    pub team2: Team,
}

impl CourtAssignment {
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team1.iter().chain(self.team2.iter())
    }
}

/// Resting players and court assignments for a single round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub resting: Vec<Player>,
    pub courts: Vec<CourtAssignment>,
}

impl Round {
    /// Every player on some court this round, in court order
    pub fn active_players(&self) -> Vec<&Player> {
        self.courts.iter().flat_map(|c| c.players()).collect()
    }
}
