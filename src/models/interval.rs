//! Booked time intervals.
//!
//! An [`Interval`] is a half-open range `[start, end)` in hours on one day
//! of one week. Intervals on different days never interact, so overlap is
//! only ever decided between intervals sharing the same [`DayKey`].

use serde::{Deserialize, Serialize};

/// Week/day coordinate of an interval.
///
/// Ordered by week first, then day, which is the order the engine walks
/// the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey {
    /// Week number (1-based).
    pub week: u32,
    /// Day of week (1 = Monday .. 7 = Sunday).
    pub day: u8,
}

impl DayKey {
    /// Creates a week/day coordinate.
    pub fn new(week: u32, day: u8) -> Self {
        Self { week, day }
    }
}

/// A booked time range on a specific day of a specific week.
///
/// # Invariants
/// - `week >= 1`
/// - `day` in `1..=7`
/// - `start < end`
///
/// The constructor does not enforce these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Week number (1-based).
    pub week: u32,
    /// Day of week (1 = Monday .. 7 = Sunday).
    pub day: u8,
    /// Start hour (inclusive).
    pub start: f64,
    /// End hour (exclusive).
    pub end: f64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(week: u32, day: u8, start: f64, end: f64) -> Self {
        Self {
            week,
            day,
            start,
            end,
        }
    }

    /// The week/day this interval lives on.
    #[inline]
    pub fn day_key(&self) -> DayKey {
        DayKey::new(self.week, self.day)
    }

    /// Length of the interval in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two intervals fall on the same week and day.
    #[inline]
    pub fn same_day(&self, other: &Self) -> bool {
        self.week == other.week && self.day == other.day
    }

    /// Whether two intervals overlap.
    ///
    /// Same week, same day, and intersecting half-open ranges. Touching
    /// intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.same_day(other) && self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_same_day() {
        let a = Interval::new(1, 1, 9.0, 11.0);
        let b = Interval::new(1, 1, 10.0, 12.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_does_not_overlap() {
        let a = Interval::new(1, 1, 9.0, 11.0);
        let b = Interval::new(1, 1, 11.0, 13.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_different_day_or_week() {
        let a = Interval::new(1, 1, 9.0, 11.0);
        assert!(!a.overlaps(&Interval::new(1, 2, 9.0, 11.0)));
        assert!(!a.overlaps(&Interval::new(2, 1, 9.0, 11.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Interval::new(3, 5, 8.0, 18.0);
        let inner = Interval::new(3, 5, 12.0, 13.5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_day_key_ordering() {
        let mut keys = vec![DayKey::new(2, 1), DayKey::new(1, 7), DayKey::new(1, 2)];
        keys.sort();
        assert_eq!(
            keys,
            vec![DayKey::new(1, 2), DayKey::new(1, 7), DayKey::new(2, 1)]
        );
    }
}
