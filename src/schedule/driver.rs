use log::{info, warn};
use rand::Rng;

use super::history::HistoryStore;
use super::planner::RoundPlanner;
use super::types::{Player, Round};
use crate::error::ScheduleError;

/// Plans rounds `1..=max_rounds` in order, feeding one history forward.
///
/// Yields each round as it is planned. The first failed round is yielded as an
/// error and ends the run, because the roster cannot change afterwards.
/// A run cannot be replayed: the history it owns has already moved on.
pub struct ScheduleRun<'a, R: Rng> {
    planner: RoundPlanner,
    roster: &'a [Player],
    max_rounds: u32,
    next_round: u32,
    history: HistoryStore,
    rng: R,
    stopped: bool,
}

impl<'a, R: Rng> ScheduleRun<'a, R> {
    pub fn new(
        planner: RoundPlanner,
        roster: &'a [Player],
        max_rounds: u32,
        history: HistoryStore,
        rng: R,
    ) -> Self {
        let courts = planner.courts_for(roster.len());
        if courts < planner.max_courts {
            warn!(
                "{} players can only fill {} of the {} requested courts",
                roster.len(),
                courts,
                planner.max_courts
            );
        }
        info!(
            "Scheduling {} rounds for {} players on {} court(s)",
            max_rounds,
            roster.len(),
            courts
        );

        ScheduleRun {
            planner,
            roster,
            max_rounds,
            next_round: 1,
            history,
            rng,
            stopped: false,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Gives back the accumulated history, e.g. for end-of-run statistics
    pub fn into_history(self) -> HistoryStore {
        self.history
    }
}

impl<R: Rng> Iterator for ScheduleRun<'_, R> {
    type Item = Result<Round, ScheduleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped || self.next_round > self.max_rounds {
            return None;
        }

        let number = self.next_round;
        self.next_round += 1;

        let result = self
            .planner
            .plan_round(number, self.roster, &mut self.history, &mut self.rng);
        if let Err(e) = &result {
            warn!("Stopping schedule: {}", e);
            self.stopped = true;
        }
        Some(result)
    }
}

impl<R: Rng> std::iter::FusedIterator for ScheduleRun<'_, R> {}

/// Runs the whole schedule eagerly. Returns the rounds together with the final
/// history, or the first round that could not be planned.
pub fn run_schedule<R: Rng>(
    planner: RoundPlanner,
    roster: &[Player],
    max_rounds: u32,
    history: HistoryStore,
    rng: R,
) -> Result<(Vec<Round>, HistoryStore), ScheduleError> {
    let mut run = ScheduleRun::new(planner, roster, max_rounds, history, rng);
    let mut rounds = Vec::with_capacity(max_rounds as usize);
    for round in run.by_ref() {
        rounds.push(round?);
    }
    info!("Planned {} rounds", rounds.len());
    Ok((rounds, run.into_history()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::scoring::Weights;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(n: usize) -> Vec<Player> {
        (1..=n).map(|i| format!("P{i:02}")).collect()
    }

    #[test]
    fn yields_rounds_in_order() {
        let players = roster(6);
        let planner = RoundPlanner::new(1, 4, Weights::default());
        let rng = ChaCha8Rng::seed_from_u64(1);
        let run = ScheduleRun::new(planner, &players, 4, HistoryStore::new(), rng);
        let numbers: Vec<u32> = run.map(|r| r.unwrap().number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn stops_after_first_failure() {
        let players = roster(3);
        let planner = RoundPlanner::new(1, 4, Weights::default());
        let rng = ChaCha8Rng::seed_from_u64(1);
        let mut run = ScheduleRun::new(planner, &players, 5, HistoryStore::new(), rng);

        assert!(matches!(
            run.next(),
            Some(Err(ScheduleError::InsufficientPlayers { round: 1, .. }))
        ));
        assert!(run.next().is_none());
        assert!(run.next().is_none());
    }

    #[test]
    fn run_schedule_returns_history() {
        let players = roster(5);
        let planner = RoundPlanner::new(1, 4, Weights::default());
        let rng = ChaCha8Rng::seed_from_u64(2);
        let (rounds, history) =
            run_schedule(planner, &players, 5, HistoryStore::new(), rng).unwrap();

        assert_eq!(rounds.len(), 5);
        assert_eq!(history.rounds_recorded(), 5);
        let games: u32 = players.iter().map(|p| history.games_played(p)).sum();
        assert_eq!(games, 20);
    }

    #[test]
    fn run_schedule_surfaces_error() {
        let players = roster(2);
        let planner = RoundPlanner::new(1, 4, Weights::default());
        let rng = ChaCha8Rng::seed_from_u64(2);
        let err = run_schedule(planner, &players, 3, HistoryStore::new(), rng).unwrap_err();
        assert!(!err.is_recoverable());
    }
}
