use std::collections::{BTreeMap, HashMap};

use super::types::{CourtAssignment, PairKey, Player};

/// Cumulative counters for everything that has happened so far in a schedule run.
///
/// Pair counters are keyed by [`PairKey`], so partner and opponent counts are
/// symmetric by construction. Counters only ever go up.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    partners: HashMap<PairKey, u32>,
    opponents: HashMap<PairKey, u32>,
    courts: HashMap<Player, BTreeMap<usize, u32>>,
    rests: HashMap<Player, u32>,
    games: HashMap<Player, u32>,
    rounds: u32,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a complete round: resting players plus every court
    pub fn record_round(&mut self, resting: &[Player], courts: &[CourtAssignment]) {
        self.record_rest(resting);
        for assignment in courts {
            self.record_court(assignment.court, &assignment.team1, &assignment.team2);
        }
        self.finish_round();
    }

    /// Bumps the rest counter of each resting player
    pub fn record_rest(&mut self, resting: &[Player]) {
        for player in resting {
            *self.rests.entry(player.clone()).or_insert(0) += 1;
        }
    }

    /// Records one court's match: partners within each team, opponents across,
    /// plus the games and court counters of all four players
    pub fn record_court(&mut self, court: usize, team1: &[Player], team2: &[Player]) {
        for team in [team1, team2] {
            for (i, a) in team.iter().enumerate() {
                for b in &team[i + 1..] {
                    *self.partners.entry(PairKey::new(a, b)).or_insert(0) += 1;
                }
            }
        }

        for a in team1 {
            for b in team2 {
                *self.opponents.entry(PairKey::new(a, b)).or_insert(0) += 1;
            }
        }

        for player in team1.iter().chain(team2) {
            *self.games.entry(player.clone()).or_insert(0) += 1;
            *self
                .courts
                .entry(player.clone())
                .or_default()
                .entry(court)
                .or_insert(0) += 1;
        }
    }

    /// Marks the end of a round; see [`HistoryStore::rounds_recorded`]
    pub fn finish_round(&mut self) {
        self.rounds += 1;
    }

    pub fn partner_count(&self, a: &str, b: &str) -> u32 {
        self.partners.get(&PairKey::new(a, b)).copied().unwrap_or(0)
    }

    pub fn opponent_count(&self, a: &str, b: &str) -> u32 {
        self.opponents.get(&PairKey::new(a, b)).copied().unwrap_or(0)
    }

    pub fn court_count(&self, player: &str, court: usize) -> u32 {
        self.courts
            .get(player)
            .and_then(|c| c.get(&court))
            .copied()
            .unwrap_or(0)
    }

    pub fn rest_count(&self, player: &str) -> u32 {
        self.rests.get(player).copied().unwrap_or(0)
    }

    pub fn games_played(&self, player: &str) -> u32 {
        self.games.get(player).copied().unwrap_or(0)
    }

    pub fn rounds_recorded(&self) -> u32 {
        self.rounds
    }

    /// Everyone `player` has partnered with, and how often
    pub fn partners_of(&self, player: &str) -> Vec<(Player, u32)> {
        Self::counts_involving(&self.partners, player)
    }

    /// Everyone `player` has played against, and how often
    pub fn opponents_of(&self, player: &str) -> Vec<(Player, u32)> {
        Self::counts_involving(&self.opponents, player)
    }

    /// Games per court number, ascending by court
    pub fn court_distribution(&self, player: &str) -> Vec<(usize, u32)> {
        self.courts
            .get(player)
            .map(|c| c.iter().map(|(&court, &n)| (court, n)).collect())
            .unwrap_or_default()
    }

    fn counts_involving(counts: &HashMap<PairKey, u32>, player: &str) -> Vec<(Player, u32)> {
        counts
            .iter()
            .filter_map(|(key, &n)| match key.other(player) {
                Some(other) if n > 0 => Some((other.to_string(), n)),
                _ => None,
            })
            .collect()
    }
}
