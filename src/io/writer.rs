use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::csv_files::write_csv;
use super::{
    CaseData, VenueRecord, LEAGUES_FILE, SCHEDULE_CSV_FILE, SCHEDULE_FILE, TEAMS_FILE,
    UNSCHEDULED_FILE, VENUES_FILE,
};
use crate::error::{FixtureError, Result};
use crate::models::{Matchup, Placement};
use crate::scheduler::ScheduleOutcome;

/// One row of `schedule.json` and `schedule.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub team1_name: String,
    pub team2_name: String,
    /// Week number (1-based).
    pub week: u32,
    /// Day of week (1 = Monday).
    pub day: u8,
    pub start: f64,
    pub end: f64,
    /// Season year of the venue row used.
    pub season: i32,
    /// League display name.
    pub league: String,
    /// `"<venue> Field #<n>"`.
    pub location: String,
    pub venue: String,
    pub field: u32,
}

impl From<&Placement> for ScheduleRecord {
    fn from(p: &Placement) -> Self {
        Self {
            team1_name: p.team1.clone(),
            team2_name: p.team2.clone(),
            week: p.week,
            day: p.day,
            start: p.start,
            end: p.end,
            season: p.season_year,
            league: p.league.clone(),
            location: p.location(),
            venue: p.venue.clone(),
            field: p.field,
        }
    }
}

/// One row of `unscheduled.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnscheduledRecord {
    pub team1_name: String,
    pub team2_name: String,
    pub league: String,
}

impl From<&Matchup> for UnscheduledRecord {
    fn from(m: &Matchup) -> Self {
        Self {
            team1_name: m.team1.clone(),
            team2_name: m.team2.clone(),
            league: m.league.clone(),
        }
    }
}

/// Writes `schedule.json` and `schedule.csv` (calendar order) and
/// `unscheduled.json` into `dir`.
///
/// Every file is written even when empty: the JSON files as `[]`, the CSV
/// file with no lines.
pub fn write_outcome(dir: &Path, outcome: &ScheduleOutcome) -> Result<()> {
    let schedule: Vec<ScheduleRecord> = outcome
        .sorted_placements()
        .iter()
        .map(ScheduleRecord::from)
        .collect();
    let unscheduled: Vec<UnscheduledRecord> =
        outcome.unscheduled.iter().map(UnscheduledRecord::from).collect();

    write_json(dir, SCHEDULE_FILE, &schedule)?;
    write_csv(dir, SCHEDULE_CSV_FILE, &schedule)?;
    write_json(dir, UNSCHEDULED_FILE, &unscheduled)?;
    debug!(
        "Wrote {} games and {} unscheduled matchups to {}",
        schedule.len(),
        unscheduled.len(),
        dir.display()
    );
    Ok(())
}

/// Writes a case's JSON input files into `dir`, creating it if needed.
pub fn write_case(dir: &Path, case: &CaseData) -> Result<()> {
    let venues: Vec<VenueRecord> = case.venues.iter().map(VenueRecord::from).collect();
    write_json(dir, TEAMS_FILE, &case.teams)?;
    write_json(dir, LEAGUES_FILE, &case.leagues)?;
    write_json(dir, VENUES_FILE, &venues)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, file: &str, value: &T) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;
    let path = dir.join(file);
    let text = serde_json::to_string_pretty(value).map_err(|e| FixtureError::json(&path, e))?;
    fs::write(&path, text).map_err(|e| FixtureError::io(&path, e))
}
