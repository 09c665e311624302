use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::csv_files::load_csv_case;
use super::{LEAGUES_FILE, TEAMS_CSV_FILE, TEAMS_FILE, VENUES_FILE};
use crate::error::{FixtureError, Result};
use crate::models::{LeagueRecord, TeamRecord, VenueAvailability, WeeklyHours, DAYS_PER_WEEK};

/// Operating hours for one day of the week, as stored in `venues.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHoursRecord {
    /// Day of week (1..=7).
    pub day: u8,
    /// Opening hour.
    pub start: f64,
    /// Closing hour.
    pub end: f64,
}

/// One venue-season row of `venues.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    /// Venue name; rows with the same name share fields.
    pub name: String,
    /// Season year the row applies to.
    pub season_year: i32,
    /// First week of the season (inclusive).
    pub season_start: u32,
    /// Last week of the season (inclusive).
    pub season_end: u32,
    /// Number of fields.
    #[serde(alias = "fields")]
    pub field: u32,
    /// Open days; days not listed are closed.
    #[serde(default)]
    pub hours: Vec<DayHoursRecord>,
}

impl TryFrom<VenueRecord> for VenueAvailability {
    type Error = FixtureError;

    /// Fails when an hours entry names a day outside 1..=7 or repeats a day.
    fn try_from(r: VenueRecord) -> Result<Self> {
        let mut hours = WeeklyHours::closed();
        for h in &r.hours {
            if !(1..=DAYS_PER_WEEK).contains(&h.day) {
                return Err(FixtureError::InvalidInput(format!(
                    "Venue {} ({}) has hours for day {}; days run 1..={DAYS_PER_WEEK}",
                    r.name, r.season_year, h.day
                )));
            }
            if hours.window(h.day).is_some() {
                return Err(FixtureError::InvalidInput(format!(
                    "Venue {} ({}) lists day {} more than once",
                    r.name, r.season_year, h.day
                )));
            }
            hours = hours.with_day(h.day, h.start, h.end);
        }
        Ok(VenueAvailability::new(r.name, r.season_year)
            .with_season(r.season_start, r.season_end)
            .with_fields(r.field)
            .with_hours(hours))
    }
}

impl From<&VenueAvailability> for VenueRecord {
    fn from(v: &VenueAvailability) -> Self {
        let hours = (1..=DAYS_PER_WEEK)
            .filter_map(|day| {
                v.window(day).map(|w| DayHoursRecord {
                    day,
                    start: w.start,
                    end: w.end,
                })
            })
            .collect();
        Self {
            name: v.name.clone(),
            season_year: v.season_year,
            season_start: v.season_start,
            season_end: v.season_end,
            field: v.fields,
            hours,
        }
    }
}

/// Inputs of one case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseData {
    /// Team rows, in file order.
    pub teams: Vec<TeamRecord>,
    /// League rows, in file order.
    pub leagues: Vec<LeagueRecord>,
    /// Venue-season rows, in file order (this is the engine's venue order).
    pub venues: Vec<VenueAvailability>,
}

impl CaseData {
    /// Builds a case from parsed rows, converting venue records.
    pub(super) fn from_records(
        teams: Vec<TeamRecord>,
        leagues: Vec<LeagueRecord>,
        venues: Vec<VenueRecord>,
    ) -> Result<Self> {
        Ok(Self {
            teams,
            leagues,
            venues: venues
                .into_iter()
                .map(VenueAvailability::try_from)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// Loads a case from `dir`.
///
/// Reads `teams.json`, `leagues.json` and `venues.json`. When there is no
/// `teams.json` but there is a `team.csv`, the case is read from
/// `team.csv`, `league.csv` and `venue.csv` instead.
///
/// Fails with [`FixtureError::MissingFile`] when any file is absent,
/// [`FixtureError::Json`] or [`FixtureError::Csv`] when one does not parse,
/// and [`FixtureError::InvalidInput`] when venue hours name a bad day.
/// Nothing is scheduled from a partially loaded case.
pub fn load_case(dir: &Path) -> Result<CaseData> {
    if !dir.join(TEAMS_FILE).is_file() && dir.join(TEAMS_CSV_FILE).is_file() {
        return load_csv_case(dir);
    }

    let teams: Vec<TeamRecord> = read_json(&dir.join(TEAMS_FILE))?;
    let leagues: Vec<LeagueRecord> = read_json(&dir.join(LEAGUES_FILE))?;
    let venues: Vec<VenueRecord> = read_json(&dir.join(VENUES_FILE))?;

    debug!(
        "Loaded case {}: {} teams, {} leagues, {} venue rows",
        dir.display(),
        teams.len(),
        leagues.len(),
        venues.len()
    );

    CaseData::from_records(teams, leagues, venues)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(FixtureError::MissingFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| FixtureError::json(path, e))
}
