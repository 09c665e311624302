//! Greedy fixture scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `ScheduleEngine` is a first-fit greedy allocator: each matchup takes the
//! first feasible (week, day, venue, slot, field) in a fixed search order
//! and is never moved afterwards. It does not backtrack and does not
//! optimize fairness or compactness.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes an outcome: scheduled rate, games per team,
//! week span and field utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 14.3

mod config;
mod engine;
mod kpi;
mod outcome;

pub use config::{
    EngineConfig, SlotPolicy, DEFAULT_GAME_DURATION_HOURS, DEFAULT_MAX_WEEK,
    MIN_GAME_DURATION_HOURS,
};
pub use engine::{DailyPlayCount, ScheduleEngine};
pub use kpi::ScheduleKpi;
pub use outcome::ScheduleOutcome;

use crate::models::{Matchup, VenueAvailability};

/// Schedules `matchups` on `venues` with default settings and the given
/// game length.
///
/// Shorthand for `ScheduleEngine::new(EngineConfig::new(game_duration_hours))`.
pub fn schedule(
    matchups: &[Matchup],
    venues: &[VenueAvailability],
    game_duration_hours: f64,
) -> ScheduleOutcome {
    ScheduleEngine::new(EngineConfig::new(game_duration_hours)).schedule(matchups, venues)
}
