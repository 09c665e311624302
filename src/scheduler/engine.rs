//! First-fit greedy fixture engine.
//!
//! # Algorithm
//!
//! For each matchup, in input order:
//! 1. Walk weeks `1..=horizon`, days `1..=7`, venues in input order.
//! 2. Skip venues whose season does not cover the week.
//! 3. For each candidate slot of the venue's window that day, reject the
//!    slot outright if either team already plays on that
//!    `(season year, week, day)`.
//! 4. Otherwise try fields `1..=n` in ascending order and commit on the
//!    first field where the field and both teams are free.
//!
//! A matchup that finds no slot, or that pairs a team with itself, is
//! reported as unscheduled. Committed
//! placements are never revisited, so the result depends on input order
//! and on this exact search order.
//!
//! # Complexity
//! O(m · W · 7 · v · s · f · log b) for m matchups, W weeks, v venues,
//! s slots per day, f fields per venue and b bookings per resource-day.

use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::{debug, info, warn};

use super::{EngineConfig, ScheduleOutcome};
use crate::index::{IntervalIndex, OverlapIndex};
use crate::models::{
    DayKey, Interval, Matchup, Placement, TimeWindow, VenueAvailability, DAYS_PER_WEEK,
};

/// Games already placed per team per `(season year, week, day)`.
///
/// The engine never lets a count exceed 1.
#[derive(Debug, Clone, Default)]
pub struct DailyPlayCount {
    counts: HashMap<String, HashMap<(i32, DayKey), u32>>,
}

impl DailyPlayCount {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games `team` plays on `key` in `season_year`.
    pub fn count(&self, team: &str, season_year: i32, key: DayKey) -> u32 {
        self.counts
            .get(team)
            .and_then(|days| days.get(&(season_year, key)))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `team` already plays on `key` in `season_year`.
    #[inline]
    pub fn has_played(&self, team: &str, season_year: i32, key: DayKey) -> bool {
        self.count(team, season_year, key) >= 1
    }

    /// Records one game and returns the new count.
    pub fn record(&mut self, team: &str, season_year: i32, key: DayKey) -> u32 {
        let count = self
            .counts
            .entry(team.to_string())
            .or_default()
            .entry((season_year, key))
            .or_insert(0);
        *count += 1;
        *count
    }
}

/// Mutable state of one run. Built empty per call and dropped afterwards.
#[derive(Debug)]
struct RunState<I> {
    /// venue name → field number → bookings
    fields: HashMap<String, HashMap<u32, I>>,
    teams: HashMap<String, I>,
    daily: DailyPlayCount,
}

impl<I: OverlapIndex> RunState<I> {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
            teams: HashMap::new(),
            daily: DailyPlayCount::new(),
        }
    }

    fn field_busy(&self, venue: &str, field: u32, slot: &Interval) -> bool {
        self.fields
            .get(venue)
            .and_then(|fields| fields.get(&field))
            .is_some_and(|idx| idx.overlaps(slot))
    }

    fn team_busy(&self, team: &str, slot: &Interval) -> bool {
        self.teams.get(team).is_some_and(|idx| idx.overlaps(slot))
    }

    fn either_plays_on(&self, matchup: &Matchup, season_year: i32, key: DayKey) -> bool {
        self.daily.has_played(&matchup.team1, season_year, key)
            || self.daily.has_played(&matchup.team2, season_year, key)
    }

    fn commit(
        &mut self,
        matchup: &Matchup,
        venue: &VenueAvailability,
        field: u32,
        slot: Interval,
    ) -> Placement {
        self.fields
            .entry(venue.name.clone())
            .or_default()
            .entry(field)
            .or_default()
            .insert(slot);
        for team in matchup.teams() {
            self.teams.entry(team.to_string()).or_default().insert(slot);
            self.daily.record(team, venue.season_year, slot.day_key());
        }
        Placement::new(matchup, slot, venue.season_year, &venue.field(field))
    }
}

/// A venue with its field count and per-day candidate slots resolved once per run.
struct VenuePlan<'a> {
    venue: &'a VenueAvailability,
    fields: u32,
    slots: [Vec<TimeWindow>; DAYS_PER_WEEK as usize],
}

impl<'a> VenuePlan<'a> {
    fn new(venue: &'a VenueAvailability, config: &EngineConfig) -> Self {
        let slots = std::array::from_fn(|i| {
            let day = i as u8 + 1;
            venue.window(day).map_or_else(Vec::new, |window| {
                config
                    .slot_policy
                    .candidate_slots(window, config.game_duration_hours)
            })
        });
        Self {
            venue,
            fields: config
                .fields_override
                .map_or(venue.fields, |n| n.min(venue.fields)),
            slots,
        }
    }

    fn slots_on(&self, day: u8) -> &[TimeWindow] {
        &self.slots[usize::from(day - 1)]
    }
}

/// First-fit greedy scheduler over per-resource interval indexes.
///
/// The index type is a parameter so the tree index and the linear
/// reference index can be swapped; both give identical results.
///
/// # Example
///
/// ```
/// use u_fixture::scheduler::{EngineConfig, ScheduleEngine};
/// use u_fixture::models::{Matchup, VenueAvailability};
///
/// let venues = vec![
///     VenueAvailability::new("Riverside", 2024)
///         .with_season(1, 1)
///         .with_fields(1)
///         .with_day_hours(1, 9.0, 11.0),
/// ];
/// let matchups = vec![Matchup::new("Hawks", "Owls", "Rec")];
///
/// let engine = ScheduleEngine::new(EngineConfig::new(2.0));
/// let outcome = engine.schedule(&matchups, &venues);
/// assert_eq!(outcome.placement_count(), 1);
/// assert_eq!(outcome.placements[0].start, 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEngine<I = IntervalIndex> {
    config: EngineConfig,
    _index: PhantomData<fn() -> I>,
}

impl ScheduleEngine {
    /// Creates an engine backed by [`IntervalIndex`].
    pub fn new(config: EngineConfig) -> Self {
        Self::with_index(config)
    }
}

impl Default for ScheduleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<I: OverlapIndex> ScheduleEngine<I> {
    /// Creates an engine backed by index type `I`.
    pub fn with_index(config: EngineConfig) -> Self {
        Self {
            config,
            _index: PhantomData,
        }
    }

    /// The run configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Places every matchup into the first feasible slot, in order.
    ///
    /// All index and counter state is created for this call and dropped
    /// when it returns, so repeated calls are independent.
    pub fn schedule(&self, matchups: &[Matchup], venues: &[VenueAvailability]) -> ScheduleOutcome {
        let plans: Vec<VenuePlan<'_>> = venues
            .iter()
            .map(|v| VenuePlan::new(v, &self.config))
            .collect();
        let horizon = self.horizon(venues);
        let mut state = RunState::<I>::new();
        let mut outcome = ScheduleOutcome::new();

        for matchup in matchups {
            if matchup.team1 == matchup.team2 {
                warn!(
                    "{} is paired with itself in {}; leaving it unscheduled",
                    matchup.team1, matchup.league
                );
                outcome.unscheduled.push(matchup.clone());
                continue;
            }
            match self.place(matchup, &plans, horizon, &mut state) {
                Some(placement) => {
                    debug!(
                        "Placed {} vs {} ({}) at {} week {} day {} {}-{}",
                        placement.team1,
                        placement.team2,
                        placement.league,
                        placement.location(),
                        placement.week,
                        placement.day,
                        placement.start,
                        placement.end
                    );
                    outcome.placements.push(placement);
                }
                None => {
                    debug!(
                        "No slot for {} vs {} ({})",
                        matchup.team1, matchup.team2, matchup.league
                    );
                    outcome.unscheduled.push(matchup.clone());
                }
            }
        }

        info!(
            "Scheduled {} of {} matchups over {} venue rows ({} unscheduled)",
            outcome.placements.len(),
            matchups.len(),
            venues.len(),
            outcome.unscheduled.len()
        );
        outcome
    }

    /// Last week worth searching: the latest season end, capped by `max_week`.
    fn horizon(&self, venues: &[VenueAvailability]) -> u32 {
        venues
            .iter()
            .filter(|v| v.season_weeks() > 0)
            .map(|v| v.season_end)
            .max()
            .unwrap_or(0)
            .min(self.config.max_week)
    }

    fn place(
        &self,
        matchup: &Matchup,
        plans: &[VenuePlan<'_>],
        horizon: u32,
        state: &mut RunState<I>,
    ) -> Option<Placement> {
        for week in 1..=horizon {
            for day in 1..=DAYS_PER_WEEK {
                let key = DayKey::new(week, day);
                for plan in plans {
                    let venue = plan.venue;
                    if !venue.in_season(week) {
                        continue;
                    }
                    for slot in plan.slots_on(day) {
                        if state.either_plays_on(matchup, venue.season_year, key) {
                            continue;
                        }
                        let interval = Interval::new(week, day, slot.start, slot.end);
                        for field in 1..=plan.fields {
                            if state.field_busy(&venue.name, field, &interval)
                                || state.team_busy(&matchup.team1, &interval)
                                || state.team_busy(&matchup.team2, &interval)
                            {
                                continue;
                            }
                            return Some(state.commit(matchup, venue, field, interval));
                        }
                    }
                }
            }
        }
        None
    }
}
