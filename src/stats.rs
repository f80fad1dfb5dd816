use serde::Serialize;

use crate::schedule::{HistoryStore, Player};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtShare {
    pub court: usize,
    pub games: u32,
    /// Share of this player's games, 0-100
    pub percentage: f64,
}

/// End-of-run summary for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: Player,
    pub games_played: u32,
    pub times_rested: u32,
    pub distinct_partners: usize,
    pub distinct_opponents: usize,
    pub partners: Vec<(Player, u32)>,
    pub opponents: Vec<(Player, u32)>,
    pub courts: Vec<CourtShare>,
}

/// Collects per-player statistics, players sorted by name
pub fn collect_player_stats<'a, I>(players: I, history: &HistoryStore) -> Vec<PlayerStats>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut names: Vec<&Player> = players.into_iter().collect();
    names.sort();

    names
        .into_iter()
        .map(|player| {
            let games_played = history.games_played(player);
            let partners = most_frequent_first(history.partners_of(player));
            let opponents = most_frequent_first(history.opponents_of(player));
            let courts = history
                .court_distribution(player)
                .into_iter()
                .map(|(court, games)| CourtShare {
                    court,
                    games,
                    percentage: if games_played == 0 {
                        0.0
                    } else {
                        games as f64 * 100.0 / games_played as f64
                    },
                })
                .collect();

            PlayerStats {
                player: player.clone(),
                games_played,
                times_rested: history.rest_count(player),
                distinct_partners: partners.len(),
                distinct_opponents: opponents.len(),
                partners,
                opponents,
                courts,
            }
        })
        .collect()
}

fn most_frequent_first(mut counts: Vec<(Player, u32)>) -> Vec<(Player, u32)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Highest court number anyone played on
pub fn max_court(stats: &[PlayerStats]) -> usize {
    stats
        .iter()
        .flat_map(|s| s.courts.iter().map(|c| c.court))
        .max()
        .unwrap_or(0)
}
