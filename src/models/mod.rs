//! Fixture scheduling domain models.
//!
//! Provides the data types the engine consumes and produces.
//!
//! # Domain Mappings
//!
//! | u-fixture | Meaning |
//! |-----------|---------|
//! | Interval | Booked `[start, end)` hours on one week/day |
//! | VenueAvailability | One venue's season, field count and weekly hours |
//! | FieldId | `(venue, field number)`, the unit of field exclusivity |
//! | Matchup | Two teams of a league that must meet once |
//! | Placement | A matchup committed to a field and slot |

mod hours;
mod interval;
mod matchup;
mod placement;
mod venue;

pub use hours::{TimeWindow, WeeklyHours, DAYS_PER_WEEK};
pub use interval::{DayKey, Interval};
pub use matchup::{LeagueRecord, Matchup, TeamRecord};
pub use placement::{Placement, Violation, ViolationType};
pub use venue::{FieldId, VenueAvailability};
