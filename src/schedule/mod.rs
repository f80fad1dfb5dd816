pub mod types;
pub mod history;
pub mod scoring;
pub mod combinations;
pub mod planner;
pub mod driver;

pub use types::{CourtAssignment, PairKey, Player, Round, Team};
pub use history::HistoryStore;
pub use scoring::{score_matchup, Weights};
pub use planner::{best_split, select_resting, RoundPlanner};
pub use driver::{run_schedule, ScheduleRun};
