use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use court_rotation::display::{
    format_player_stats, format_round, format_schedule_error, write_schedule_to_file,
};
use court_rotation::export::{write_json_report, write_stats_csv, ScheduleReport};
use court_rotation::schedule::{HistoryStore, ScheduleRun};
use court_rotation::stats::collect_player_stats;
use court_rotation::{load_roster, SchedulerConfig};

/// Rotate players across doubles courts, spreading partners and opponents and sharing rest
#[derive(Parser, Debug)]
#[command(name = "court-rotation", version, about)]
struct Cli {
    /// Player list, one name per line
    #[arg(short, long, default_value = "players.txt")]
    players: PathBuf,

    /// JSON config file; command-line options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of courts to fill each round
    #[arg(long)]
    courts: Option<usize>,

    /// Number of rounds to schedule
    #[arg(long)]
    rounds: Option<u32>,

    /// Players per court (even)
    #[arg(long)]
    court_size: Option<usize>,

    /// Print per-player statistics after the schedule
    #[arg(long)]
    stats: bool,

    /// Seed for the rest tie-break, for reproducible schedules
    #[arg(long)]
    seed: Option<u64>,

    // --- Weight overrides ---
    #[arg(long)]
    partner_weight: Option<f64>,

    #[arg(long)]
    opponent_weight: Option<f64>,

    #[arg(long)]
    balance_weight: Option<f64>,

    #[arg(long)]
    new_weight: Option<f64>,

    /// Also write the schedule text to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the schedule (and statistics, if enabled) as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write per-player statistics as CSV
    #[arg(long)]
    stats_csv: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<SchedulerConfig> {
        let mut config = match &self.config {
            Some(path) => SchedulerConfig::from_json_file(path)?,
            None => SchedulerConfig::default(),
        };

        if let Some(courts) = self.courts {
            config.max_courts = courts;
        }
        if let Some(rounds) = self.rounds {
            config.max_rounds = rounds;
        }
        if let Some(size) = self.court_size {
            config.court_size = size;
        }
        if self.stats {
            config.print_stats = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(w) = self.partner_weight {
            config.weights.partner = w;
        }
        if let Some(w) = self.opponent_weight {
            config.weights.opponent = w;
        }
        if let Some(w) = self.balance_weight {
            config.weights.balance = w;
        }
        if let Some(w) = self.new_weight {
            config.weights.new_interaction = w;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = cli.config()?;
    let roster = load_roster(&cli.players)?;
    roster.check_playable(config.court_size)?;
    let seed = config.resolve_seed();
    info!("Config: {:?}", config);
    info!("Rest tie-break seed: {} (pass --seed {} to reproduce)", seed, seed);

    let mut text = String::new();
    let mut rounds = Vec::new();
    let mut failure = None;

    let rng = config.rng();
    let mut run = ScheduleRun::new(
        config.planner(),
        roster.names(),
        config.max_rounds,
        HistoryStore::new(),
        rng,
    );
    for result in run.by_ref() {
        match result {
            Ok(round) => {
                text.push_str(&format_round(&round));
                rounds.push(round);
            }
            Err(e) => {
                text.push_str(&format_schedule_error(&e));
                failure = Some(e);
            }
        }
    }
    let history = run.into_history();

    let want_stats = config.print_stats || cli.stats_csv.is_some();
    let stats = if want_stats {
        collect_player_stats(roster.iter(), &history)
    } else {
        Vec::new()
    };
    if config.print_stats {
        text.push_str(&format_player_stats(&stats));
    }

    print!("{}", text);

    if let Some(path) = &cli.output {
        write_schedule_to_file(&text, path)
            .with_context(|| format!("Failed to write schedule to {}", path.display()))?;
        info!("Schedule saved to {}", path.display());
    }
    if let Some(path) = &cli.json {
        let report = ScheduleReport::new(&config, &rounds, &stats);
        write_json_report(&report, path)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        info!("JSON report saved to {}", path.display());
    }
    if let Some(path) = &cli.stats_csv {
        write_stats_csv(&stats, path)
            .with_context(|| format!("Failed to write statistics to {}", path.display()))?;
        info!("Statistics saved to {}", path.display());
    }

    if let Some(e) = failure {
        return Err(e).context("Schedule stopped early");
    }
    Ok(())
}
