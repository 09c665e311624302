//! Operating hours.
//!
//! Defines when a venue's fields can host games: one optional window per
//! day of the week, repeated every week of the venue's season.
//!
//! # Time Model
//! Times are hours of the day as `f64` (e.g. `9.0`, `13.5`). Windows are
//! half-open `[start, end)`, so a game may end exactly at closing time.

use serde::{Deserialize, Serialize};

/// Days in a scheduling week.
pub const DAYS_PER_WEEK: u8 = 7;

/// A time window [start, end) in hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeWindow {
    /// Window start (hours, inclusive).
    pub start: f64,
    /// Window end (hours, exclusive).
    pub end: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the window in hours (zero when inverted).
    #[inline]
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Whether the window has positive length.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Whether `[start, end)` fits entirely inside this window.
    pub fn encloses(&self, start: f64, end: f64) -> bool {
        start >= self.start && end <= self.end && start < end
    }
}

/// Per-day-of-week operating hours.
///
/// Index 0 is day 1 (Monday). A `None` entry means the venue is closed
/// that day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklyHours {
    days: [Option<TimeWindow>; DAYS_PER_WEEK as usize],
}

impl WeeklyHours {
    /// Creates a schedule closed on every day.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Creates a schedule with the same hours every day.
    pub fn uniform(start: f64, end: f64) -> Self {
        Self {
            days: [Some(TimeWindow::new(start, end)); DAYS_PER_WEEK as usize],
        }
    }

    /// Sets the hours for one day (1..=7). Out-of-range days are ignored.
    pub fn with_day(mut self, day: u8, start: f64, end: f64) -> Self {
        self.set_day(day, Some(TimeWindow::new(start, end)));
        self
    }

    /// Sets or clears the hours for one day (1..=7).
    pub fn set_day(&mut self, day: u8, window: Option<TimeWindow>) {
        if let Some(slot) = day_index(day).and_then(|i| self.days.get_mut(i)) {
            *slot = window;
        }
    }

    /// Operating window for a day (1..=7), if open.
    pub fn window(&self, day: u8) -> Option<&TimeWindow> {
        day_index(day).and_then(|i| self.days[i].as_ref())
    }

    /// Days (1..=7) that have a valid window.
    pub fn open_days(&self) -> Vec<u8> {
        (1..=DAYS_PER_WEEK)
            .filter(|&d| self.window(d).is_some_and(TimeWindow::is_valid))
            .collect()
    }

    /// Total open hours over one week, ignoring inverted windows.
    pub fn weekly_hours(&self) -> f64 {
        self.days.iter().flatten().map(TimeWindow::duration).sum()
    }
}

fn day_index(day: u8) -> Option<usize> {
    (1..=DAYS_PER_WEEK)
        .contains(&day)
        .then(|| usize::from(day - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window() {
        let w = TimeWindow::new(9.0, 17.0);
        assert!((w.duration() - 8.0).abs() < 1e-10);
        assert!(w.encloses(15.0, 17.0));
        assert!(!w.encloses(16.0, 18.0));
    }

    #[test]
    fn test_inverted_window() {
        let w = TimeWindow::new(18.0, 9.0);
        assert!(!w.is_valid());
        assert_eq!(w.duration(), 0.0);
    }

    #[test]
    fn test_weekly_hours_days() {
        let hours = WeeklyHours::closed()
            .with_day(1, 9.0, 17.0)
            .with_day(6, 8.0, 12.0)
            .with_day(9, 8.0, 12.0); // ignored

        assert_eq!(hours.window(1), Some(&TimeWindow::new(9.0, 17.0)));
        assert!(hours.window(2).is_none());
        assert!(hours.window(0).is_none());
        assert!(hours.window(8).is_none());
        assert_eq!(hours.open_days(), vec![1, 6]);
        assert!((hours.weekly_hours() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_uniform_hours() {
        let hours = WeeklyHours::uniform(9.0, 21.0);
        assert_eq!(hours.open_days(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!((hours.weekly_hours() - 84.0).abs() < 1e-10);
    }

    #[test]
    fn test_inverted_day_not_open() {
        let hours = WeeklyHours::closed().with_day(3, 12.0, 10.0);
        assert!(hours.window(3).is_some());
        assert!(hours.open_days().is_empty());
    }
}
