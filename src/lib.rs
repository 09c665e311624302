//! Sports fixture scheduling for the U-Engine ecosystem.
//!
//! Places league matchups onto venue fields week by week with a first-fit
//! greedy search backed by per-resource interval-overlap indexes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Interval`, `VenueAvailability`, `FieldId`,
//!   `Matchup`, `Placement`, `Violation`, team and league rows
//! - **`index`**: Busy-interval indexes (`IntervalIndex`, `LinearIntervalIndex`)
//! - **`scheduler`**: `ScheduleEngine`, `ScheduleOutcome`, `ScheduleKpi`
//! - **`pairing`**: Round-robin matchup generation with game limits
//! - **`validation`**: Input integrity checks (duplicate IDs, league refs, malformed venues)
//! - **`io`**: JSON and CSV case files
//! - **`generator`**: Seeded random cases
//! - **`config`** / **`driver`**: TOML run configuration and the case runner
//!
//! # Example
//!
//! ```
//! use u_fixture::models::{Matchup, VenueAvailability};
//! use u_fixture::scheduler::schedule;
//!
//! let venues = vec![VenueAvailability::new("Park", 2024)
//!     .with_season(1, 4)
//!     .with_fields(1)
//!     .with_uniform_hours(9.0, 11.0)];
//! let matchups = vec![Matchup::new("A", "B", "Rec"), Matchup::new("C", "D", "Rec")];
//!
//! let outcome = schedule(&matchups, &venues, 2.0);
//! assert_eq!(outcome.placements[1].day, 2);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 14.3 (Interval Trees)

pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod index;
pub mod io;
pub mod logging;
pub mod models;
pub mod pairing;
pub mod scheduler;
pub mod validation;

pub use error::{FixtureError, Result};
