//! Result of a scheduling run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::index::{IntervalIndex, OverlapIndex};
use crate::models::{Matchup, Placement, VenueAvailability, Violation, ViolationType};

/// Placements and unplaced matchups produced by one run.
///
/// Placements are in commit order (the order of the input matchups that
/// were placed). Use [`ScheduleOutcome::sorted_placements`] for calendar
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Committed games.
    pub placements: Vec<Placement>,
    /// Matchups for which no feasible slot existed.
    pub unscheduled: Vec<Matchup>,
}

impl ScheduleOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed games.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Whether every matchup was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Games `team` plays in.
    pub fn placements_for_team(&self, team: &str) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.involves(team)).collect()
    }

    /// Games held on one field.
    pub fn placements_for_field(&self, venue: &str, field: u32) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.venue == venue && p.field == field)
            .collect()
    }

    /// Placements ordered by season year, week, day and start, then venue
    /// and field. Ties keep commit order.
    pub fn sorted_placements(&self) -> Vec<Placement> {
        let mut sorted = self.placements.clone();
        sorted.sort_by(|a, b| {
            a.season_year
                .cmp(&b.season_year)
                .then(a.week.cmp(&b.week))
                .then(a.day.cmp(&b.day))
                .then(a.start.total_cmp(&b.start))
                .then_with(|| a.venue.cmp(&b.venue))
                .then(a.field.cmp(&b.field))
        });
        sorted
    }

    /// Re-checks the placements against the scheduling rules.
    ///
    /// Reports field and team double-bookings, teams playing more than
    /// once per `(season year, week, day)`, and games outside their
    /// venue's season or hours. An empty result means the outcome is
    /// consistent with `venues`.
    pub fn verify(&self, venues: &[VenueAvailability]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut fields: HashMap<(String, u32), IntervalIndex> = HashMap::new();
        let mut teams: HashMap<&str, IntervalIndex> = HashMap::new();
        let mut daily: HashMap<(&str, i32, u32, u8), u32> = HashMap::new();

        for p in &self.placements {
            let slot = p.interval();

            let field = fields.entry((p.venue.clone(), p.field)).or_default();
            if field.overlaps(&slot) {
                violations.push(Violation::new(
                    ViolationType::FieldDoubleBooked,
                    p.location(),
                    format!(
                        "{} vs {} overlaps another game on week {} day {} {}-{}",
                        p.team1, p.team2, p.week, p.day, p.start, p.end
                    ),
                ));
            }
            field.insert(slot);

            for team in [p.team1.as_str(), p.team2.as_str()] {
                let index = teams.entry(team).or_default();
                if index.overlaps(&slot) {
                    violations.push(Violation::new(
                        ViolationType::TeamDoubleBooked,
                        team,
                        format!(
                            "{team} is in overlapping games on week {} day {} {}-{}",
                            p.week, p.day, p.start, p.end
                        ),
                    ));
                }
                index.insert(slot);

                let count = daily.entry((team, p.season_year, p.week, p.day)).or_insert(0);
                *count += 1;
                if *count == 2 {
                    violations.push(Violation::new(
                        ViolationType::DailyCapExceeded,
                        team,
                        format!(
                            "{team} plays more than once on season {} week {} day {}",
                            p.season_year, p.week, p.day
                        ),
                    ));
                }
            }

            if let Some(v) = check_venue(p, venues) {
                violations.push(v);
            }
        }

        violations
    }
}

/// Checks a placement against the venue row it claims to use.
fn check_venue(p: &Placement, venues: &[VenueAvailability]) -> Option<Violation> {
    let rows: Vec<&VenueAvailability> = venues
        .iter()
        .filter(|v| v.name == p.venue && v.season_year == p.season_year)
        .collect();
    if rows.is_empty() {
        return Some(Violation::new(
            ViolationType::UnknownVenue,
            p.location(),
            format!("No venue row for {} in season {}", p.venue, p.season_year),
        ));
    }

    let in_season: Vec<&&VenueAvailability> = rows.iter().filter(|v| v.in_season(p.week)).collect();
    if in_season.is_empty() {
        return Some(Violation::new(
            ViolationType::OutsideSeason,
            p.location(),
            format!("Week {} is outside the season of {}", p.week, p.venue),
        ));
    }

    if !in_season.iter().any(|v| p.field >= 1 && p.field <= v.fields) {
        return Some(Violation::new(
            ViolationType::UnknownVenue,
            p.location(),
            format!("{} has no field #{}", p.venue, p.field),
        ));
    }

    let inside_hours = in_season.iter().any(|v| {
        v.window(p.day)
            .is_some_and(|w| w.encloses(p.start, p.end))
    });
    if !inside_hours {
        return Some(Violation::new(
            ViolationType::OutsideOperatingHours,
            p.location(),
            format!(
                "{}-{} on day {} is outside the hours of {}",
                p.start, p.end, p.day, p.venue
            ),
        ));
    }
    None
}
