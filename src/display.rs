use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ScheduleError;
use crate::schedule::{Player, Round};
use crate::stats::PlayerStats;

const ROUND_SEPARATOR_WIDTH: usize = 50;

/// Sorted, comma-separated names
pub fn format_players(players: &[Player]) -> String {
    let mut sorted: Vec<&str> = players.iter().map(String::as_str).collect();
    sorted.sort();
    sorted.join(", ")
}

/// Renders a round as text:
///
/// ```text
/// Round 3
/// Resting Players: Koti, Tarun
/// Court 1: Appa, Madhu vs Jeevan, Phani
/// --------------------------------------------------
/// ```
pub fn format_round(round: &Round) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Round {}", round.number);

    let resting = if round.resting.is_empty() {
        "none".to_string()
    } else {
        format_players(&round.resting)
    };
    let _ = writeln!(out, "Resting Players: {}", resting);

    for court in &round.courts {
        let _ = writeln!(
            out,
            "Court {}: {} vs {}",
            court.court,
            format_players(&court.team1),
            format_players(&court.team2)
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(ROUND_SEPARATOR_WIDTH));
    out
}

/// Human-readable text for a round that could not be planned
pub fn format_schedule_error(error: &ScheduleError) -> String {
    match error {
        ScheduleError::InsufficientPlayers {
            round,
            available,
            needed,
        } => format!(
            "Round {} cannot be played due to insufficient players (have {}, need {}).\n",
            round, available, needed
        ),
        ScheduleError::InvalidCourtSize(size) => format!(
            "Cannot schedule courts of {} players: court size must be even and at least 2.\n",
            size
        ),
    }
}

/// Renders the end-of-run statistics block
pub fn format_player_stats(stats: &[PlayerStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nPlayer Statistics:");
    let _ = writeln!(out, "{}", "=".repeat(ROUND_SEPARATOR_WIDTH));

    for s in stats {
        let _ = writeln!(out, "\nPlayer: {}", s.player);
        let _ = writeln!(out, "{}", "-".repeat(20));
        let _ = writeln!(out, "Games Played: {}", s.games_played);
        let _ = writeln!(out, "Times Rested: {}", s.times_rested);
        let _ = writeln!(out, "Distinct Partners: {}", s.distinct_partners);
        let _ = writeln!(out, "Distinct Opponents: {}", s.distinct_opponents);

        let _ = writeln!(out, "\nPartnership History:");
        for (partner, count) in &s.partners {
            let _ = writeln!(out, "  - with {}: {} {}", partner, count, times(*count));
        }

        let _ = writeln!(out, "\nOpposition History:");
        for (opponent, count) in &s.opponents {
            let _ = writeln!(out, "  - against {}: {} {}", opponent, count, times(*count));
        }

        let _ = writeln!(out, "\nCourt Distribution:");
        for share in &s.courts {
            let _ = writeln!(
                out,
                "  - Court {}: {} {} ({:.1}%)",
                share.court,
                share.games,
                times(share.games),
                share.percentage
            );
        }
        let _ = writeln!(out, "\n{}", "=".repeat(ROUND_SEPARATOR_WIDTH));
    }
    out
}

fn times(n: u32) -> &'static str {
    if n == 1 {
        "time"
    } else {
        "times"
    }
}

/// Writes rendered schedule text to a file, under a generation timestamp header
pub fn write_schedule_to_file<P: AsRef<Path>>(text: &str, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "** Schedule generated {} **\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    )?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
