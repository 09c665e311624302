//! Venue availability model.
//!
//! A venue row describes one season at one venue: which weeks it is
//! open, how many fields it has, and its daily operating hours. The same
//! venue may appear in several rows (one per season year).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{TimeWindow, WeeklyHours};

/// Availability of a venue for one season.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VenueAvailability {
    /// Venue name (part of every field identity).
    pub name: String,
    /// Season year tag; groups the once-per-day counter.
    pub season_year: i32,
    /// First week of the season (inclusive).
    pub season_start: u32,
    /// Last week of the season (inclusive).
    pub season_end: u32,
    /// Number of fields, numbered `1..=fields`.
    pub fields: u32,
    /// Operating hours per day of week.
    pub hours: WeeklyHours,
}

impl VenueAvailability {
    /// Creates a venue with one field, a one-week season and no open days.
    pub fn new(name: impl Into<String>, season_year: i32) -> Self {
        Self {
            name: name.into(),
            season_year,
            season_start: 1,
            season_end: 1,
            fields: 1,
            hours: WeeklyHours::closed(),
        }
    }

    /// Sets the season week range (inclusive on both ends).
    pub fn with_season(mut self, start_week: u32, end_week: u32) -> Self {
        self.season_start = start_week;
        self.season_end = end_week;
        self
    }

    /// Sets the number of fields.
    pub fn with_fields(mut self, fields: u32) -> Self {
        self.fields = fields;
        self
    }

    /// Opens the venue on one day (1..=7).
    pub fn with_day_hours(mut self, day: u8, start: f64, end: f64) -> Self {
        self.hours = self.hours.with_day(day, start, end);
        self
    }

    /// Opens the venue with the same hours every day.
    pub fn with_uniform_hours(mut self, start: f64, end: f64) -> Self {
        self.hours = WeeklyHours::uniform(start, end);
        self
    }

    /// Replaces the weekly hours.
    pub fn with_hours(mut self, hours: WeeklyHours) -> Self {
        self.hours = hours;
        self
    }

    /// Whether the venue's season covers `week`.
    #[inline]
    pub fn in_season(&self, week: u32) -> bool {
        week >= self.season_start && week <= self.season_end
    }

    /// Number of weeks in the season (zero when the range is inverted).
    pub fn season_weeks(&self) -> u32 {
        if self.season_end < self.season_start {
            0
        } else {
            self.season_end - self.season_start + 1
        }
    }

    /// Operating window for a day (1..=7), if open.
    pub fn window(&self, day: u8) -> Option<&TimeWindow> {
        self.hours.window(day)
    }

    /// Identity of field `number` at this venue.
    pub fn field(&self, number: u32) -> FieldId {
        FieldId::new(self.name.clone(), number)
    }
}

/// Identity of a single field: `(venue name, field number)`.
///
/// Fields at different venues never share occupancy, even when their
/// numbers match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldId {
    /// Venue name.
    pub venue: String,
    /// Field number (1-based).
    pub number: u32,
}

impl FieldId {
    /// Creates a field identity.
    pub fn new(venue: impl Into<String>, number: u32) -> Self {
        Self {
            venue: venue.into(),
            number,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Field #{}", self.venue, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_builder() {
        let v = VenueAvailability::new("Riverside Park", 2024)
            .with_season(3, 10)
            .with_fields(4)
            .with_day_hours(1, 9.0, 17.0);

        assert_eq!(v.name, "Riverside Park");
        assert_eq!(v.season_year, 2024);
        assert_eq!(v.fields, 4);
        assert_eq!(v.season_weeks(), 8);
        assert!(v.in_season(3));
        assert!(v.in_season(10));
        assert!(!v.in_season(2));
        assert!(!v.in_season(11));
        assert!(v.window(1).is_some());
        assert!(v.window(2).is_none());
    }

    #[test]
    fn test_inverted_season() {
        let v = VenueAvailability::new("Backwards", 2024).with_season(10, 3);
        assert_eq!(v.season_weeks(), 0);
        assert!(!v.in_season(5));
    }

    #[test]
    fn test_field_identity() {
        let v = VenueAvailability::new("North", 2024).with_fields(2);
        let f1 = v.field(1);
        assert_eq!(f1.to_string(), "North Field #1");
        assert_ne!(f1, FieldId::new("South", 1));
        assert_eq!(f1, FieldId::new("North", 1));
    }
}
