//! CSV case files.
//!
//! `team.csv` and `league.csv` use the same columns as the JSON rows.
//! `venue.csv` is flat, one row per venue-season and open day:
//!
//! ```text
//! name,seasonYear,seasonStart,seasonEnd,field,day,start,end
//! Riverside,2024,1,10,2,1,18.0,22.0
//! Riverside,2024,1,10,2,6,9.0,17.0
//! ```
//!
//! Consecutive rows that agree on the first five columns form one
//! venue-season. A row with `day`, `start` and `end` opens that day; a row
//! with only `start` and `end` opens every day; a row with none of them adds
//! no hours. A file without any of the `day`, `start` and `end` columns
//! opens every venue all day, every day.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{
    CaseData, DayHoursRecord, VenueRecord, LEAGUES_CSV_FILE, TEAMS_CSV_FILE, VENUES_CSV_FILE,
};
use crate::error::{FixtureError, Result};
use crate::models::{LeagueRecord, TeamRecord, DAYS_PER_WEEK};

const HOUR_COLUMNS: [&str; 3] = ["day", "start", "end"];

/// Opening and closing hour of every day when `venue.csv` has no hour columns.
const ALL_DAY: (f64, f64) = (0.0, 24.0);

/// One row of `venue.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueCsvRow {
    /// Venue name.
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
    /// Day of week (1..=7); empty means every day.
    #[serde(default)]
    pub day: Option<u8>,
    /// Opening hour.
    #[serde(default)]
    pub start: Option<f64>,
    /// Closing hour.
    #[serde(default)]
    pub end: Option<f64>,
}

impl VenueCsvRow {
    fn for_record(
        record: &VenueRecord,
        day: Option<u8>,
        start: Option<f64>,
        end: Option<f64>,
    ) -> Self {
        Self {
            name: record.name.clone(),
            season_year: record.season_year,
            season_start: record.season_start,
            season_end: record.season_end,
            field: record.field,
            day,
            start,
            end,
        }
    }

    fn same_venue(&self, record: &VenueRecord) -> bool {
        self.name == record.name
            && self.season_year == record.season_year
            && self.season_start == record.season_start
            && self.season_end == record.season_end
            && self.field == record.field
    }

    fn day_hours(&self) -> Result<Vec<DayHoursRecord>> {
        match (self.day, self.start, self.end) {
            (None, None, None) => Ok(Vec::new()),
            (None, Some(start), Some(end)) => Ok(every_day(start, end)),
            (Some(day), Some(start), Some(end)) => Ok(vec![DayHoursRecord { day, start, end }]),
            _ => Err(FixtureError::InvalidInput(format!(
                "Venue {} ({}) has a row with start or end missing",
                self.name, self.season_year
            ))),
        }
    }
}

fn every_day(start: f64, end: f64) -> Vec<DayHoursRecord> {
    (1..=DAYS_PER_WEEK)
        .map(|day| DayHoursRecord { day, start, end })
        .collect()
}

/// Folds flat `venue.csv` rows into venue records.
fn venue_records(rows: Vec<VenueCsvRow>, has_hour_columns: bool) -> Result<Vec<VenueRecord>> {
    let mut records: Vec<VenueRecord> = Vec::new();
    for row in rows {
        let hours = if has_hour_columns {
            row.day_hours()?
        } else {
            every_day(ALL_DAY.0, ALL_DAY.1)
        };
        match records.last_mut() {
            Some(last) if has_hour_columns && row.same_venue(last) => last.hours.extend(hours),
            _ => records.push(VenueRecord {
                name: row.name,
                season_year: row.season_year,
                season_start: row.season_start,
                season_end: row.season_end,
                field: row.field,
                hours,
            }),
        }
    }
    Ok(records)
}

/// Flat `venue.csv` rows for one venue record.
fn venue_rows(record: &VenueRecord) -> Vec<VenueCsvRow> {
    if record.hours.is_empty() {
        return vec![VenueCsvRow::for_record(record, None, None, None)];
    }
    record
        .hours
        .iter()
        .map(|h| VenueCsvRow::for_record(record, Some(h.day), Some(h.start), Some(h.end)))
        .collect()
}

/// Loads `team.csv`, `league.csv` and `venue.csv` from `dir`.
pub(super) fn load_csv_case(dir: &Path) -> Result<CaseData> {
    let (teams, _) = read_csv::<TeamRecord>(&dir.join(TEAMS_CSV_FILE))?;
    let (leagues, _) = read_csv::<LeagueRecord>(&dir.join(LEAGUES_CSV_FILE))?;
    let (rows, headers) = read_csv::<VenueCsvRow>(&dir.join(VENUES_CSV_FILE))?;
    let has_hour_columns = headers.iter().any(|h| HOUR_COLUMNS.contains(&h));
    let venues = venue_records(rows, has_hour_columns)?;

    debug!(
        "Loaded CSV case {}: {} teams, {} leagues, {} venue rows",
        dir.display(),
        teams.len(),
        leagues.len(),
        venues.len()
    );

    CaseData::from_records(teams, leagues, venues)
}

/// Writes a case's inputs as `team.csv`, `league.csv` and `venue.csv` into
/// `dir`, creating it if needed.
pub fn write_case_csv(dir: &Path, case: &CaseData) -> Result<()> {
    let venues: Vec<VenueCsvRow> = case
        .venues
        .iter()
        .map(VenueRecord::from)
        .flat_map(|r| venue_rows(&r))
        .collect();
    write_csv(dir, TEAMS_CSV_FILE, &case.teams)?;
    write_csv(dir, LEAGUES_CSV_FILE, &case.leagues)?;
    write_csv(dir, VENUES_CSV_FILE, &venues)?;
    Ok(())
}

/// Reads every row of a headed CSV file, returning the rows and the header.
fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<(Vec<T>, csv::StringRecord)> {
    if !path.is_file() {
        return Err(FixtureError::MissingFile(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| FixtureError::csv(path, e))?;
    let headers = reader
        .headers()
        .map_err(|e| FixtureError::csv(path, e))?
        .clone();
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| FixtureError::csv(path, e))?;
    Ok((rows, headers))
}

/// Writes `rows` with a header line. An empty slice gives an empty file.
pub(super) fn write_csv<T: Serialize>(dir: &Path, file: &str, rows: &[T]) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;
    let path = dir.join(file);
    let mut writer = csv::Writer::from_path(&path).map_err(|e| FixtureError::csv(&path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| FixtureError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| FixtureError::io(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_case;
    use crate::models::VenueAvailability;

    fn write_file(dir: &Path, file: &str, text: &str) {
        fs::write(dir.join(file), text).unwrap();
    }

    fn write_teams_and_leagues(dir: &Path) {
        write_file(dir, TEAMS_CSV_FILE, "name,leagueId\nHawks,L1\nOwls,L1\n");
        write_file(
            dir,
            LEAGUES_CSV_FILE,
            "leagueId,leagueName,numberOfGames\nL1,Recreational,\n",
        );
    }

    #[test]
    fn test_load_flat_venue_rows() {
        let tmp = tempfile::tempdir().unwrap();
        write_teams_and_leagues(tmp.path());
        write_file(
            tmp.path(),
            VENUES_CSV_FILE,
            "name,seasonYear,seasonStart,seasonEnd,field,day,start,end\n\
             Riverside,2024,1,10,2,1,18.0,22.0\n\
             Riverside,2024,1,10,2,6,9,17\n\
             Lot,2024,1,4,1,,10,12\n\
             Shed,2023,2,3,1,,,\n",
        );

        let case = load_case(tmp.path()).unwrap();
        assert_eq!(case.teams.len(), 2);
        assert_eq!(case.leagues[0].number_of_games, None);
        assert_eq!(case.venues.len(), 3);
        assert_eq!(case.venues[0].hours.open_days(), vec![1, 6]);
        assert_eq!(case.venues[0].fields, 2);
        assert_eq!(case.venues[1].hours.open_days(), (1..=7).collect::<Vec<u8>>());
        assert!(case.venues[2].hours.open_days().is_empty());
        assert_eq!(case.venues[2].season_year, 2023);
    }

    #[test]
    fn test_load_venue_rows_without_hour_columns() {
        let tmp = tempfile::tempdir().unwrap();
        write_teams_and_leagues(tmp.path());
        write_file(
            tmp.path(),
            VENUES_CSV_FILE,
            "name,seasonYear,seasonStart,seasonEnd,field\nRiverside,2024,1,10,2\n",
        );

        let case = load_case(tmp.path()).unwrap();
        let venue = &case.venues[0];
        assert_eq!(venue.hours.open_days().len(), 7);
        let window = venue.window(3).unwrap();
        assert_eq!((window.start, window.end), ALL_DAY);
    }

    #[test]
    fn test_incomplete_hours_row_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        write_teams_and_leagues(tmp.path());
        write_file(
            tmp.path(),
            VENUES_CSV_FILE,
            "name,seasonYear,seasonStart,seasonEnd,field,day,start,end\nLot,2024,1,4,1,2,9,\n",
        );

        let err = load_case(tmp.path()).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidInput(_)));
    }

    #[test]
    fn test_bad_day_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        write_teams_and_leagues(tmp.path());
        write_file(
            tmp.path(),
            VENUES_CSV_FILE,
            "name,seasonYear,seasonStart,seasonEnd,field,day,start,end\nLot,2024,1,4,1,8,9,11\n",
        );

        let err = load_case(tmp.path()).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_csv() {
        let tmp = tempfile::tempdir().unwrap();
        write_teams_and_leagues(tmp.path());
        write_file(
            tmp.path(),
            VENUES_CSV_FILE,
            "name,seasonYear,seasonStart,seasonEnd,field\nLot,soon,1,4,1\n",
        );

        let err = load_case(tmp.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Csv { .. }));
    }

    #[test]
    fn test_missing_csv_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), TEAMS_CSV_FILE, "name,leagueId\n");

        let err = load_case(tmp.path()).unwrap_err();
        match err {
            FixtureError::MissingFile(path) => assert!(path.ends_with(LEAGUES_CSV_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_closed_venue_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let case = CaseData {
            teams: vec![TeamRecord::new("A", "L1")],
            leagues: vec![LeagueRecord::new("L1", "Rec").with_number_of_games(3)],
            venues: vec![
                VenueAvailability::new("Shed", 2024).with_season(1, 2),
                VenueAvailability::new("Park", 2024)
                    .with_season(1, 8)
                    .with_fields(2)
                    .with_day_hours(2, 17.5, 21.0),
            ],
        };
        write_case_csv(tmp.path(), &case).unwrap();

        assert_eq!(load_case(tmp.path()).unwrap(), case);
    }
}
