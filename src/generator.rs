//! Random case generator.
//!
//! Produces random but well-formed fixture cases: every venue has fields,
//! a forward season and at least one open day, and team names are unique
//! across leagues. Generation is fully determined by the seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::CaseData;
use crate::models::{LeagueRecord, TeamRecord, VenueAvailability, DAYS_PER_WEEK};

/// Configuration for generating fixture cases.
#[derive(Debug, Clone)]
pub struct CaseGeneratorConfig {
    /// Number of leagues.
    pub num_leagues: usize,
    /// Teams per league range (min, max).
    pub teams_per_league: (usize, usize),
    /// Number of venues.
    pub num_venues: usize,
    /// Fields per venue range (min, max).
    pub fields_per_venue: (u32, u32),
    /// Season year stamped on every venue row.
    pub season_year: i32,
    /// Week the earliest season may start.
    pub first_week: u32,
    /// Season length range in weeks (min, max).
    pub season_weeks: (u32, u32),
    /// Probability that a given day is open at a venue.
    pub open_day_probability: f64,
    /// Probability that a league requests a game count.
    pub game_count_probability: f64,
}

impl Default for CaseGeneratorConfig {
    fn default() -> Self {
        Self {
            num_leagues: 3,
            teams_per_league: (4, 8),
            num_venues: 2,
            fields_per_venue: (1, 4),
            season_year: 2024,
            first_week: 1,
            season_weeks: (8, 16),
            open_day_probability: 0.5,
            game_count_probability: 0.5,
        }
    }
}

impl CaseGeneratorConfig {
    /// Small case: one league, one venue.
    pub fn small() -> Self {
        Self {
            num_leagues: 1,
            teams_per_league: (4, 6),
            num_venues: 1,
            fields_per_venue: (1, 2),
            ..Self::default()
        }
    }

    /// Large case: many leagues competing for few fields.
    pub fn large() -> Self {
        Self {
            num_leagues: 6,
            teams_per_league: (8, 16),
            num_venues: 3,
            fields_per_venue: (1, 3),
            season_weeks: (6, 12),
            open_day_probability: 0.35,
            ..Self::default()
        }
    }
}

/// Generator for fixture cases.
pub struct CaseGenerator {
    config: CaseGeneratorConfig,
    rng: StdRng,
}

impl CaseGenerator {
    /// Create a new generator with the given config and seed.
    pub fn new(config: CaseGeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a case.
    pub fn generate(&mut self) -> CaseData {
        let leagues = self.generate_leagues();
        let teams = self.generate_teams(&leagues);
        let venues = self.generate_venues();
        CaseData {
            teams,
            leagues,
            venues,
        }
    }

    fn generate_leagues(&mut self) -> Vec<LeagueRecord> {
        let (lo, hi) = self.config.teams_per_league;
        (1..=self.config.num_leagues)
            .map(|i| {
                let league = LeagueRecord::new(format!("L{i}"), format!("League {i}"));
                if self.rng.random_bool(self.config.game_count_probability.clamp(0.0, 1.0)) {
                    // Somewhere between a few games and a full round robin
                    // of the largest possible league.
                    let most = (hi * hi.saturating_sub(1) / 2).max(1);
                    let games = self.rng.random_range(lo.max(1)..=most.max(lo.max(1)));
                    league.with_number_of_games(i64::try_from(games).unwrap_or(i64::MAX))
                } else {
                    league
                }
            })
            .collect()
    }

    fn generate_teams(&mut self, leagues: &[LeagueRecord]) -> Vec<TeamRecord> {
        let (lo, hi) = self.config.teams_per_league;
        let mut teams = Vec::new();
        for (li, league) in leagues.iter().enumerate() {
            let count = self.rng.random_range(lo..=hi.max(lo));
            for ti in 1..=count {
                teams.push(TeamRecord::new(
                    format!("L{}-T{ti:02}", li + 1),
                    league.league_id.clone(),
                ));
            }
        }
        teams
    }

    fn generate_venues(&mut self) -> Vec<VenueAvailability> {
        let (f_lo, f_hi) = self.config.fields_per_venue;
        let (w_lo, w_hi) = self.config.season_weeks;
        let p_open = self.config.open_day_probability.clamp(0.0, 1.0);

        (1..=self.config.num_venues)
            .map(|i| {
                let fields = self.rng.random_range(f_lo.max(1)..=f_hi.max(f_lo.max(1)));
                let start = self.config.first_week.max(1) + self.rng.random_range(0..=2);
                let weeks = self.rng.random_range(w_lo.max(1)..=w_hi.max(w_lo.max(1)));
                let mut venue = VenueAvailability::new(format!("Venue {i}"), self.config.season_year)
                    .with_season(start, start + weeks - 1)
                    .with_fields(fields);

                let mut open = 0;
                for day in 1..=DAYS_PER_WEEK {
                    if self.rng.random_bool(p_open) {
                        let (s, e) = self.day_hours(day);
                        venue = venue.with_day_hours(day, s, e);
                        open += 1;
                    }
                }
                if open == 0 {
                    let day = self.rng.random_range(1..=DAYS_PER_WEEK);
                    let (s, e) = self.day_hours(day);
                    venue = venue.with_day_hours(day, s, e);
                }
                venue
            })
            .collect()
    }

    /// Weekday evenings, weekend days.
    fn day_hours(&mut self, day: u8) -> (f64, f64) {
        if day >= 6 {
            let start = f64::from(self.rng.random_range(8u8..=10));
            (start, start + 8.0)
        } else {
            let start = f64::from(self.rng.random_range(17u8..=18));
            (start, start + 4.0)
        }
    }
}
