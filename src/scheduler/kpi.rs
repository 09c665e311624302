//! Schedule quality metrics (KPIs).
//!
//! Summarizes an outcome for reporting. The engine does not optimize any
//! of these; they describe what first-fit produced.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled Rate | placed / (placed + unscheduled) |
//! | Games per Team | placements each team appears in |
//! | Week Span | first and last week with a game |
//! | Field Utilization | booked hours / open hours over the venue's season |

use std::collections::{BTreeMap, HashMap};

use super::ScheduleOutcome;
use crate::models::{FieldId, VenueAvailability};

/// Schedule performance indicators.
///
/// All time values are in hours.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of placed games.
    pub placed: usize,
    /// Number of matchups left unscheduled.
    pub unscheduled: usize,
    /// Fraction of matchups placed (1.0 when there were none).
    pub scheduled_rate: f64,
    /// Games per team, ordered by team name.
    pub games_per_team: BTreeMap<String, usize>,
    /// First week containing a game.
    pub first_week: Option<u32>,
    /// Last week containing a game.
    pub last_week: Option<u32>,
    /// Booked hours per field.
    pub busy_hours_by_field: BTreeMap<FieldId, f64>,
    /// Booked / open hours per field, for fields of known venues.
    pub utilization_by_field: BTreeMap<FieldId, f64>,
    /// Mean utilization over every field of every venue.
    pub avg_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from an outcome and the venues it was scheduled on.
    pub fn calculate(outcome: &ScheduleOutcome, venues: &[VenueAvailability]) -> Self {
        let placed = outcome.placements.len();
        let unscheduled = outcome.unscheduled.len();
        let total = placed + unscheduled;
        let scheduled_rate = if total == 0 {
            1.0
        } else {
            placed as f64 / total as f64
        };

        let mut games_per_team: BTreeMap<String, usize> = BTreeMap::new();
        let mut busy_hours_by_field: BTreeMap<FieldId, f64> = BTreeMap::new();
        for p in &outcome.placements {
            *games_per_team.entry(p.team1.clone()).or_insert(0) += 1;
            *games_per_team.entry(p.team2.clone()).or_insert(0) += 1;
            *busy_hours_by_field.entry(p.field_id()).or_insert(0.0) += p.duration();
        }
        for m in &outcome.unscheduled {
            games_per_team.entry(m.team1.clone()).or_insert(0);
            games_per_team.entry(m.team2.clone()).or_insert(0);
        }

        let first_week = outcome.placements.iter().map(|p| p.week).min();
        let last_week = outcome.placements.iter().map(|p| p.week).max();

        // A venue may have several season rows; open hours add up per field.
        let mut open_hours: HashMap<FieldId, f64> = HashMap::new();
        for v in venues {
            let per_field = v.hours.weekly_hours() * f64::from(v.season_weeks());
            for n in 1..=v.fields {
                *open_hours.entry(v.field(n)).or_insert(0.0) += per_field;
            }
        }

        let mut utilization_by_field = BTreeMap::new();
        for (field, open) in &open_hours {
            if *open > 0.0 {
                let busy = busy_hours_by_field.get(field).copied().unwrap_or(0.0);
                utilization_by_field.insert(field.clone(), busy / open);
            }
        }
        let avg_utilization = if utilization_by_field.is_empty() {
            0.0
        } else {
            utilization_by_field.values().sum::<f64>() / utilization_by_field.len() as f64
        };

        Self {
            placed,
            unscheduled,
            scheduled_rate,
            games_per_team,
            first_week,
            last_week,
            busy_hours_by_field,
            utilization_by_field,
            avg_utilization,
        }
    }

    /// Smallest and largest games-per-team counts.
    pub fn games_per_team_range(&self) -> Option<(usize, usize)> {
        let min = self.games_per_team.values().min()?;
        let max = self.games_per_team.values().max()?;
        Some((*min, *max))
    }
}
