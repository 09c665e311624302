//! Placement (solution) model.
//!
//! A placement records that a matchup was committed to one field at one
//! venue during one time slot. Violations describe properties a set of
//! placements fails to satisfy when it is checked after the fact.

use serde::{Deserialize, Serialize};

use super::{FieldId, Interval, Matchup};

/// A matchup committed to a concrete slot.
///
/// Immutable once emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// First team name.
    pub team1: String,
    /// Second team name.
    pub team2: String,
    /// League name.
    pub league: String,
    /// Week number (1-based).
    pub week: u32,
    /// Day of week (1..=7).
    pub day: u8,
    /// Start hour (inclusive).
    pub start: f64,
    /// End hour (exclusive).
    pub end: f64,
    /// Season year of the venue row used.
    pub season_year: i32,
    /// Venue name.
    pub venue: String,
    /// Field number at the venue (1-based).
    pub field: u32,
}

impl Placement {
    /// Creates a placement for `matchup` in `slot` on `field`.
    pub fn new(matchup: &Matchup, slot: Interval, season_year: i32, field: &FieldId) -> Self {
        Self {
            team1: matchup.team1.clone(),
            team2: matchup.team2.clone(),
            league: matchup.league.clone(),
            week: slot.week,
            day: slot.day,
            start: slot.start,
            end: slot.end,
            season_year,
            venue: field.venue.clone(),
            field: field.number,
        }
    }

    /// The booked interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.week, self.day, self.start, self.end)
    }

    /// The field this game occupies.
    pub fn field_id(&self) -> FieldId {
        FieldId::new(self.venue.clone(), self.field)
    }

    /// Human-readable location, e.g. `"Riverside Field #2"`.
    pub fn location(&self) -> String {
        self.field_id().to_string()
    }

    /// Whether `team` plays in this game.
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// The matchup this placement satisfies.
    pub fn matchup(&self) -> Matchup {
        Matchup::new(self.team1.clone(), self.team2.clone(), self.league.clone())
    }

    /// Game length in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A property violated by a set of placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity (team name or field location).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two games overlap on the same field.
    FieldDoubleBooked,
    /// A team is in two overlapping games.
    TeamDoubleBooked,
    /// A team plays more than once on one day of a season.
    DailyCapExceeded,
    /// A game falls outside its venue's hours for that day.
    OutsideOperatingHours,
    /// A game falls outside its venue's season weeks.
    OutsideSeason,
    /// A game refers to a venue row or field that does not exist.
    UnknownVenue,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let severity = match violation_type {
            ViolationType::FieldDoubleBooked | ViolationType::TeamDoubleBooked => 95,
            ViolationType::DailyCapExceeded => 80,
            ViolationType::OutsideOperatingHours | ViolationType::OutsideSeason => 90,
            ViolationType::UnknownVenue => 100,
        };
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Placement {
        Placement::new(
            &Matchup::new("Hawks", "Owls", "Rec"),
            Interval::new(2, 3, 14.0, 16.0),
            2024,
            &FieldId::new("Riverside", 2),
        )
    }

    #[test]
    fn test_placement_fields() {
        let p = sample();
        assert_eq!(p.week, 2);
        assert_eq!(p.day, 3);
        assert_eq!(p.season_year, 2024);
        assert_eq!(p.location(), "Riverside Field #2");
        assert_eq!(p.interval(), Interval::new(2, 3, 14.0, 16.0));
        assert!((p.duration() - 2.0).abs() < 1e-10);
        assert!(p.involves("Owls"));
        assert!(!p.involves("Crows"));
        assert_eq!(p.matchup(), Matchup::new("Hawks", "Owls", "Rec"));
    }

    #[test]
    fn test_violation_severity() {
        let v = Violation::new(ViolationType::TeamDoubleBooked, "Hawks", "overlap");
        assert_eq!(v.severity, 95);
        assert_eq!(v.entity_id, "Hawks");

        let v = Violation::new(ViolationType::DailyCapExceeded, "Hawks", "twice");
        assert_eq!(v.severity, 80);
    }
}
