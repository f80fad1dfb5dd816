use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use csv::WriterBuilder;
use serde::Serialize;

use crate::config::SchedulerConfig;
use crate::error::ExportError;
use crate::schedule::Round;
use crate::stats::{max_court, PlayerStats};

/// Everything a run produced, in a form suitable for JSON
#[derive(Debug, Serialize)]
pub struct ScheduleReport<'a> {
    pub generated_at: DateTime<Local>,
    pub config: &'a SchedulerConfig,
    pub rounds: &'a [Round],
    /// Empty unless statistics were requested
    pub stats: &'a [PlayerStats],
}

impl<'a> ScheduleReport<'a> {
    pub fn new(
        config: &'a SchedulerConfig,
        rounds: &'a [Round],
        stats: &'a [PlayerStats],
    ) -> Self {
        ScheduleReport {
            generated_at: Local::now(),
            config,
            rounds,
            stats,
        }
    }
}

/// Writes the report as pretty-printed JSON
pub fn write_json_report<P: AsRef<Path>>(
    report: &ScheduleReport<'_>,
    path: P,
) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// Writes one CSV row per player with totals and one `court_N` column per court
pub fn write_stats_csv<P: AsRef<Path>>(
    stats: &[PlayerStats],
    path: P,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    let courts = max_court(stats);
    let mut header: Vec<String> = [
        "player",
        "games_played",
        "times_rested",
        "distinct_partners",
        "distinct_opponents",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend((1..=courts).map(|c| format!("court_{}", c)));
    wtr.write_record(&header)?;

    for s in stats {
        let mut record = vec![
            s.player.clone(),
            s.games_played.to_string(),
            s.times_rested.to_string(),
            s.distinct_partners.to_string(),
            s.distinct_opponents.to_string(),
        ];
        record.extend((1..=courts).map(|court| {
            s.courts
                .iter()
                .find(|c| c.court == court)
                .map(|c| c.games)
                .unwrap_or(0)
                .to_string()
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
