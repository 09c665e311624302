//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::models::TimeWindow;

/// Last week number the engine will consider.
pub const DEFAULT_MAX_WEEK: u32 = 52;

/// Default game length in hours.
pub const DEFAULT_GAME_DURATION_HOURS: f64 = 2.0;

/// Shortest game length the engine accepts, in hours.
pub const MIN_GAME_DURATION_HOURS: f64 = 0.25;

/// How candidate time slots are produced inside a venue's daily window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotPolicy {
    /// Back-to-back slots of the game duration starting at opening time,
    /// while the slot still ends by closing time.
    #[default]
    Stepped,
    /// A fixed list of slots tried in order; slots outside the venue's
    /// window for the day are skipped.
    Fixed { slots: Vec<TimeWindow> },
}

impl SlotPolicy {
    /// The two fixed daily slots: 9-11 and 14-16.
    pub fn two_daily_slots() -> Self {
        SlotPolicy::Fixed {
            slots: vec![TimeWindow::new(9.0, 11.0), TimeWindow::new(14.0, 16.0)],
        }
    }

    /// Candidate slots for one day's operating window, in search order.
    ///
    /// Produces nothing for inverted windows or a duration below
    /// [`MIN_GAME_DURATION_HOURS`].
    pub fn candidate_slots(&self, window: &TimeWindow, duration_hours: f64) -> Vec<TimeWindow> {
        match self {
            SlotPolicy::Stepped => {
                if duration_hours.is_nan()
                    || duration_hours < MIN_GAME_DURATION_HOURS
                    || !window.is_valid()
                    || !window.end.is_finite()
                {
                    return Vec::new();
                }
                let mut slots = Vec::new();
                let mut k = 0u32;
                loop {
                    let start = window.start + f64::from(k) * duration_hours;
                    let end = start + duration_hours;
                    if end > window.end {
                        break;
                    }
                    slots.push(TimeWindow::new(start, end));
                    k += 1;
                }
                slots
            }
            SlotPolicy::Fixed { slots } => slots
                .iter()
                .filter(|s| window.encloses(s.start, s.end))
                .copied()
                .collect(),
        }
    }
}

/// Parameters of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Game length in hours (used by [`SlotPolicy::Stepped`]).
    pub game_duration_hours: f64,
    /// Slot generation policy.
    pub slot_policy: SlotPolicy,
    /// Caps the fields used at every venue. A venue with fewer fields
    /// keeps its own count.
    pub fields_override: Option<u32>,
    /// Last week searched, regardless of declared seasons.
    pub max_week: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            game_duration_hours: DEFAULT_GAME_DURATION_HOURS,
            slot_policy: SlotPolicy::Stepped,
            fields_override: None,
            max_week: DEFAULT_MAX_WEEK,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the given game duration.
    pub fn new(game_duration_hours: f64) -> Self {
        Self {
            game_duration_hours,
            ..Default::default()
        }
    }

    /// Sets the slot policy.
    pub fn with_slot_policy(mut self, policy: SlotPolicy) -> Self {
        self.slot_policy = policy;
        self
    }

    /// Restricts every venue to at most `fields` fields.
    pub fn with_fields_override(mut self, fields: u32) -> Self {
        self.fields_override = Some(fields);
        self
    }

    /// Sets the last week searched.
    pub fn with_max_week(mut self, max_week: u32) -> Self {
        self.max_week = max_week;
        self
    }
}
