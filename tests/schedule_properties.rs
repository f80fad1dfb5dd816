//! Schedule-level properties checked against the public library API.
//!
//! Every run uses a seeded ChaCha generator so results are reproducible.

use std::collections::HashSet;

use court_rotation::schedule::{
    best_split, run_schedule, score_matchup, HistoryStore, Player, Round, RoundPlanner, ScheduleRun,
    Weights,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CLUB: &[&str] = &[
    "Appa", "Jeevan", "Koti", "Madhu", "Murali", "Phani", "Prasad", "Praveen", "Raghu R", "Rambabu",
    "Rao Seema", "Ravi G", "Tarun", "Sreeni", "Subhani", "Tripura", "Srinivas", "Vijay", "Randeep",
];

fn roster(n: usize) -> Vec<Player> {
    CLUB.iter().take(n).map(|s| s.to_string()).collect()
}

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn schedule(
    players: &[Player],
    courts: usize,
    rounds: u32,
    seed: u64,
) -> (Vec<Round>, HistoryStore) {
    let planner = RoundPlanner::new(courts, 4, Weights::default());
    run_schedule(planner, players, rounds, HistoryStore::new(), seeded(seed)).unwrap()
}

fn assert_round_is_consistent(round: &Round, players: &[Player], courts: usize) {
    let resting: HashSet<&Player> = round.resting.iter().collect();
    let active = round.active_players();
    let active_set: HashSet<&Player> = active.iter().copied().collect();

    // No one twice on court, no one both resting and playing
    assert_eq!(active.len(), active_set.len(), "round {} repeats a player", round.number);
    assert!(resting.is_disjoint(&active_set), "round {}", round.number);
    assert_eq!(resting.len(), round.resting.len());

    let everyone: HashSet<&Player> = players.iter().collect();
    let union: HashSet<&Player> = resting.union(&active_set).copied().collect();
    assert_eq!(union, everyone, "round {}", round.number);

    assert_eq!(round.courts.len(), courts);
    assert_eq!(active.len(), courts * 4);
    for (i, court) in round.courts.iter().enumerate() {
        assert_eq!(court.court, i + 1);
        assert_eq!(court.team1.len(), 2);
        assert_eq!(court.team2.len(), 2);
    }
}

fn rest_spread(players: &[Player], history: &HistoryStore) -> u32 {
    let counts: Vec<u32> = players.iter().map(|p| history.rest_count(p)).collect();
    counts.iter().max().unwrap() - counts.iter().min().unwrap()
}

#[test]
fn rounds_partition_the_roster() {
    for (size, courts) in [(4, 1), (5, 1), (9, 2), (13, 3), (19, 4)] {
        let players = roster(size);
        let (rounds, _) = schedule(&players, courts, 8, size as u64);
        assert_eq!(rounds.len(), 8);
        for round in &rounds {
            assert_round_is_consistent(round, &players, courts);
        }
    }
}

#[test]
fn requested_courts_are_capped_by_roster() {
    let players = roster(10);
    let (rounds, _) = schedule(&players, 4, 3, 11);
    for round in &rounds {
        assert_round_is_consistent(round, &players, 2);
        assert_eq!(round.resting.len(), 2);
    }
}

#[test]
fn pair_counts_are_symmetric() {
    let players = roster(11);
    let (_, history) = schedule(&players, 2, 12, 4);
    for a in &players {
        for b in &players {
            assert_eq!(history.partner_count(a, b), history.partner_count(b, a));
            assert_eq!(history.opponent_count(a, b), history.opponent_count(b, a));
        }
    }
}

#[test]
fn counters_never_decrease() {
    let players = roster(10);
    let planner = RoundPlanner::new(2, 4, Weights::default());
    let mut run = ScheduleRun::new(planner, &players, 10, HistoryStore::new(), seeded(8));

    let snapshot = |h: &HistoryStore| -> Vec<u32> {
        let mut values = Vec::new();
        for a in &players {
            values.push(h.rest_count(a));
            values.push(h.games_played(a));
            values.push(h.court_count(a, 1));
            values.push(h.court_count(a, 2));
            for b in &players {
                values.push(h.partner_count(a, b));
                values.push(h.opponent_count(a, b));
            }
        }
        values
    };

    let mut previous = snapshot(run.history());
    while let Some(round) = run.next() {
        round.unwrap();
        let current = snapshot(run.history());
        assert!(previous.iter().zip(&current).all(|(before, after)| before <= after));
        previous = current;
    }
    assert_eq!(run.history().rounds_recorded(), 10);
}

#[test]
fn same_seed_same_schedule() {
    let players = roster(19);
    let (first, _) = schedule(&players, 4, 10, 2024);
    let (second, _) = schedule(&players, 4, 10, 2024);
    assert_eq!(first, second);
}

#[test]
fn four_players_never_rest_and_rotate_partners() {
    let players = roster(4);
    let (rounds, history) = schedule(&players, 1, 3, 0);

    for round in &rounds {
        assert!(round.resting.is_empty());
        let mut on_court: Vec<&Player> = round.active_players();
        on_court.sort();
        let mut expected: Vec<&Player> = players.iter().collect();
        expected.sort();
        assert_eq!(on_court, expected);
    }

    // Three rounds are exactly enough for every pair to partner once
    for (i, a) in players.iter().enumerate() {
        for b in &players[i + 1..] {
            assert_eq!(history.partner_count(a, b), 1, "{a} / {b}");
        }
    }
}

#[test]
fn eight_players_one_court_rotate_rest() {
    let players = roster(8);
    let planner = RoundPlanner::new(1, 4, Weights::default());
    let mut run = ScheduleRun::new(planner, &players, 8, HistoryStore::new(), seeded(77));

    let mut played = 0;
    while let Some(round) = run.next() {
        let round = round.unwrap();
        played += 1;
        assert_eq!(round.resting.len(), 4);
        assert_eq!(round.active_players().len(), 4);

        let history = run.history();
        assert!(rest_spread(&players, history) <= 1);
        if played % 2 == 0 {
            // Nobody rests a second time until everyone has rested once
            for p in &players {
                assert_eq!(history.rest_count(p), played / 2);
            }
        }
    }
    assert_eq!(played, 8);
}

#[test]
fn five_players_share_rest_evenly() {
    let players = roster(5);
    for k in 1..=4u32 {
        let (rounds, history) = schedule(&players, 1, 5 * k, k as u64);
        assert!(rounds.iter().all(|r| r.resting.len() == 1));
        for p in &players {
            assert_eq!(history.rest_count(p), k);
            assert_eq!(history.games_played(p), 4 * k);
        }
    }
}

#[test]
fn repeated_partners_score_below_strangers() {
    let mut history = HistoryStore::new();
    let team = |a: &str, b: &str| vec![a.to_string(), b.to_string()];
    for _ in 0..3 {
        history.record_court(1, &team("Koti", "Madhu"), &team("Murali", "Phani"));
        history.record_court(2, &team("Tarun", "Sreeni"), &team("Vijay", "Randeep"));
    }

    let weights = Weights::default();
    let opponents = team("Appa", "Jeevan");
    let together = score_matchup(&team("Koti", "Madhu"), &opponents, &history, &weights);
    let apart = score_matchup(&team("Koti", "Tarun"), &opponents, &history, &weights);

    assert!(together < apart);
    assert_eq!(apart - together, 3.0 * weights.partner);
}

#[test]
fn exhaustive_split_matches_permutation_search() {
    let players = roster(7);
    let (_, history) = schedule(&players, 1, 6, 13);
    let weights = Weights::default();

    let (_, _, best) = best_split(&players, 2, &history, &weights).unwrap();

    // Independent reference: every ordered choice of four distinct players
    let mut reference = f64::NEG_INFINITY;
    let n = players.len();
    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                for d in 0..n {
                    let picked = [a, b, c, d];
                    let distinct: HashSet<usize> = picked.iter().copied().collect();
                    if distinct.len() < 4 {
                        continue;
                    }
                    let team1 = vec![players[a].clone(), players[b].clone()];
                    let team2 = vec![players[c].clone(), players[d].clone()];
                    reference = reference.max(score_matchup(&team1, &team2, &history, &weights));
                }
            }
        }
    }
    assert_eq!(best, reference);
}

#[test]
fn roster_too_small_stops_run() {
    let players = roster(3);
    let planner = RoundPlanner::new(1, 4, Weights::default());
    let results: Vec<_> =
        ScheduleRun::new(planner, &players, 5, HistoryStore::new(), seeded(0)).collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}
