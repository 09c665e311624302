//! Case files.
//!
//! A case is a directory with three inputs and its outputs. Inputs are JSON,
//! or CSV when the directory has `team.csv` and no `teams.json`:
//!
//! | File | Direction | Rows |
//! |------|-----------|------|
//! | `teams.json` / `team.csv` | in | [`TeamRecord`](crate::models::TeamRecord) |
//! | `leagues.json` / `league.csv` | in | [`LeagueRecord`](crate::models::LeagueRecord) |
//! | `venues.json` / `venue.csv` | in | [`VenueRecord`] / [`VenueCsvRow`] |
//! | `schedule.json`, `schedule.csv` | out | [`ScheduleRecord`] |
//! | `unscheduled.json` | out | [`UnscheduledRecord`] |

mod csv_files;
mod loader;
mod writer;

pub use csv_files::{write_case_csv, VenueCsvRow};
pub use loader::{load_case, CaseData, DayHoursRecord, VenueRecord};
pub use writer::{write_case, write_outcome, ScheduleRecord, UnscheduledRecord};

/// Team rows file name.
pub const TEAMS_FILE: &str = "teams.json";
/// League rows file name.
pub const LEAGUES_FILE: &str = "leagues.json";
/// Venue rows file name.
pub const VENUES_FILE: &str = "venues.json";
/// Placed games file name.
pub const SCHEDULE_FILE: &str = "schedule.json";
/// Unplaced matchups file name.
pub const UNSCHEDULED_FILE: &str = "unscheduled.json";

/// Team rows, CSV form.
pub const TEAMS_CSV_FILE: &str = "team.csv";
/// League rows, CSV form.
pub const LEAGUES_CSV_FILE: &str = "league.csv";
/// Venue rows, CSV form.
pub const VENUES_CSV_FILE: &str = "venue.csv";
/// Placed games, CSV form.
pub const SCHEDULE_CSV_FILE: &str = "schedule.csv";
