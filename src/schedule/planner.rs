use std::collections::HashSet;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use super::combinations::{self, Combinations};
use super::history::HistoryStore;
use super::scoring::{score_matchup, Weights};
use super::types::{CourtAssignment, Player, Round, Team};
use crate::error::ScheduleError;

/// Plans one round at a time against a shared [`HistoryStore`].
///
/// Team search is exhaustive: each court looks at `C(n, t) * C(n - t, t)` splits,
/// where `n` is the number of players still unassigned and `t = court_size / 2`.
/// That is fine for doubles with a club-sized roster but grows quickly with
/// larger courts or rosters, so callers should keep both small.
#[derive(Debug, Clone)]
pub struct RoundPlanner {
    pub max_courts: usize,
    pub court_size: usize,
    pub weights: Weights,
}

impl RoundPlanner {
    pub fn new(max_courts: usize, court_size: usize, weights: Weights) -> Self {
        RoundPlanner {
            max_courts,
            court_size,
            weights,
        }
    }

    /// Court sizes must split into two non-empty teams of equal size
    pub fn check_court_size(&self) -> Result<(), ScheduleError> {
        if self.court_size < 2 || self.court_size % 2 != 0 {
            return Err(ScheduleError::InvalidCourtSize(self.court_size));
        }
        Ok(())
    }

    /// Courts that can actually be filled from a roster of `roster_len` players
    pub fn courts_for(&self, roster_len: usize) -> usize {
        if self.check_court_size().is_err() {
            return 0;
        }
        self.max_courts.min(roster_len / self.court_size)
    }

    /// Picks who rests, then fills courts left to right with the best-scoring split.
    ///
    /// Rest counters are committed before any court is chosen, and each court is
    /// committed before the next one is searched, so later courts see the effect
    /// of earlier ones in the same round. Nothing is recorded for a round that
    /// fails: the court size and roster are checked before any counter moves,
    /// and after that every court is guaranteed enough players.
    pub fn plan_round<R: Rng + ?Sized>(
        &self,
        number: u32,
        roster: &[Player],
        history: &mut HistoryStore,
        rng: &mut R,
    ) -> Result<Round, ScheduleError> {
        self.check_court_size()?;

        let insufficient = || ScheduleError::InsufficientPlayers {
            round: number,
            available: roster.len(),
            needed: self.court_size,
        };

        let num_courts = self.courts_for(roster.len());
        if num_courts == 0 {
            return Err(insufficient());
        }

        let surplus = roster.len() - num_courts * self.court_size;
        let resting = select_resting(roster, surplus, history, rng);
        history.record_rest(&resting);
        debug!("Round {}: resting {:?}", number, resting);

        let resting_set: HashSet<&Player> = resting.iter().collect();
        let mut unassigned: Vec<Player> = roster
            .iter()
            .filter(|p| !resting_set.contains(p))
            .cloned()
            .collect();

        let team_size = self.court_size / 2;
        let mut courts = Vec::with_capacity(num_courts);
        for court in 1..=num_courts {
            trace!(
                "Round {} court {}: {} candidate team1 sets from {} players",
                number,
                court,
                combinations::count(unassigned.len(), team_size),
                unassigned.len()
            );
            let (team1, team2, score) = best_split(&unassigned, team_size, history, &self.weights)
                .ok_or_else(insufficient)?;
            debug!(
                "Round {} court {}: {:?} vs {:?} (score {})",
                number, court, team1, team2, score
            );

            history.record_court(court, &team1, &team2);
            let taken: HashSet<&Player> = team1.iter().chain(team2.iter()).collect();
            unassigned.retain(|p| !taken.contains(p));

            courts.push(CourtAssignment { court, team1, team2 });
        }
        history.finish_round();

        Ok(Round {
            number,
            resting,
            courts,
        })
    }
}

/// Chooses `surplus` players to sit out: fewest rests first, random order among equals.
///
/// The result keeps roster order so it is independent of the shuffle.
pub fn select_resting<R: Rng + ?Sized>(
    roster: &[Player],
    surplus: usize,
    history: &HistoryStore,
    rng: &mut R,
) -> Vec<Player> {
    if surplus == 0 {
        return Vec::new();
    }

    let mut order: Vec<&Player> = roster.iter().collect();
    order.shuffle(rng);
    // Stable sort keeps the shuffled order among players with equal rest counts
    order.sort_by_key(|p| history.rest_count(p));

    let chosen: HashSet<&Player> = order.into_iter().take(surplus).collect();
    roster.iter().filter(|p| chosen.contains(p)).cloned().collect()
}

/// Exhaustively searches every way to form two disjoint teams of `team_size`
/// from `candidates` and returns the best-scoring pair with its score.
///
/// Team 1 subsets are tried in lexicographic index order, team 2 subsets of the
/// remainder likewise, and a split only replaces the current best when it scores
/// strictly higher, so the first best split in that order wins. Teams keep the
/// order of `candidates`. Returns `None` if there are not enough candidates.
pub fn best_split(
    candidates: &[Player],
    team_size: usize,
    history: &HistoryStore,
    weights: &Weights,
) -> Option<(Team, Team, f64)> {
    if team_size == 0 || candidates.len() < team_size * 2 {
        return None;
    }

    let pick = |pool: &[usize], idx: &[usize]| -> Team {
        idx.iter().map(|&i| candidates[pool[i]].clone()).collect()
    };
    let everyone: Vec<usize> = (0..candidates.len()).collect();

    let mut best: Option<(Team, Team, f64)> = None;
    for first in Combinations::new(candidates.len(), team_size) {
        let team1 = pick(&everyone, &first);
        let rest: Vec<usize> = everyone.iter().copied().filter(|i| !first.contains(i)).collect();

        for second in Combinations::new(rest.len(), team_size) {
            let team2 = pick(&rest, &second);
            let score = score_matchup(&team1, &team2, history, weights);
            let better = match &best {
                Some((_, _, top)) => score > *top,
                None => true,
            };
            if better {
                best = Some((team1.clone(), team2, score));
            }
        }
    }
    best
}
