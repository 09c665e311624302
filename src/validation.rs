//! Input validation for fixture cases.
//!
//! Checks structural integrity of teams, leagues, and venues before
//! pairing and scheduling. Detects:
//! - Duplicate team names within a league and duplicate league ids
//! - Teams referring to unknown leagues
//! - Venues with no fields, inverted seasons, or empty or inverted daily hours
//!
//! Validation is advisory. The engine skips malformed venues on its own,
//! so callers usually log the problems and keep going.

use crate::models::{LeagueRecord, TeamRecord, VenueAvailability, DAYS_PER_WEEK};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A team references a league that doesn't exist.
    UnknownLeague,
    /// A venue row has no fields.
    NoFields,
    /// A venue's season ends before it starts.
    InvertedSeason,
    /// A venue's window on some day is empty or inverted.
    InvertedHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates the input data for a fixture case.
///
/// Checks:
/// 1. No duplicate league IDs
/// 2. No duplicate team names within a league
/// 3. Every team's league exists
/// 4. Every venue row has at least one field
/// 5. Every venue row's season is not inverted
/// 6. Every open day closes after it opens
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teams: &[TeamRecord],
    leagues: &[LeagueRecord],
    venues: &[VenueAvailability],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut league_ids = HashSet::new();
    for l in leagues {
        if !league_ids.insert(l.league_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate league ID: {}", l.league_id),
            ));
        }
    }

    let mut team_keys = HashSet::new();
    for t in teams {
        if !team_keys.insert((t.league_id.as_str(), t.name.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team '{}' in league '{}'", t.name, t.league_id),
            ));
        }
        if !league_ids.contains(t.league_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLeague,
                format!(
                    "Team '{}' references unknown league '{}'",
                    t.name, t.league_id
                ),
            ));
        }
    }

    for v in venues {
        let label = format!("{} ({})", v.name, v.season_year);
        if v.fields == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoFields,
                format!("Venue {label} has no fields"),
            ));
        }
        if v.season_end < v.season_start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedSeason,
                format!(
                    "Venue {label} season ends at week {} before it starts at week {}",
                    v.season_end, v.season_start
                ),
            ));
        }
        for day in 1..=DAYS_PER_WEEK {
            if let Some(w) = v.window(day) {
                if !w.is_valid() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedHours,
                        format!(
                            "Venue {label} closes at {} but opens at {} on day {day}",
                            w.end, w.start
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_leagues() -> Vec<LeagueRecord> {
        vec![
            LeagueRecord::new("L1", "Premier"),
            LeagueRecord::new("L2", "Division One"),
        ]
    }

    fn sample_teams() -> Vec<TeamRecord> {
        vec![
            TeamRecord::new("Hawks", "L1"),
            TeamRecord::new("Owls", "L1"),
            TeamRecord::new("Hawks", "L2"),
        ]
    }

    fn sample_venues() -> Vec<VenueAvailability> {
        vec![VenueAvailability::new("Park", 2024)
            .with_season(1, 10)
            .with_fields(2)
            .with_uniform_hours(9.0, 17.0)]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_teams(), &sample_leagues(), &sample_venues()).is_ok());
    }

    #[test]
    fn test_same_name_in_other_league_is_fine() {
        let teams = vec![TeamRecord::new("A", "L1"), TeamRecord::new("A", "L2")];
        assert!(validate_input(&teams, &sample_leagues(), &[]).is_ok());
    }

    #[test]
    fn test_duplicate_team_in_league() {
        let teams = vec![TeamRecord::new("A", "L1"), TeamRecord::new("A", "L1")];
        let errs = validate_input(&teams, &sample_leagues(), &[]).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_duplicate_league() {
        let leagues = vec![LeagueRecord::new("L1", "A"), LeagueRecord::new("L1", "B")];
        let errs = validate_input(&[], &leagues, &[]).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_unknown_league() {
        let teams = vec![TeamRecord::new("A", "L9")];
        let errs = validate_input(&teams, &sample_leagues(), &[]).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::UnknownLeague);
        assert!(errs[0].message.contains("L9"));
    }

    #[test]
    fn test_malformed_venue() {
        let venues = vec![VenueAvailability::new("Lot", 2024)
            .with_season(8, 3)
            .with_fields(0)
            .with_day_hours(2, 17.0, 9.0)];
        let errs = validate_input(&[], &[], &venues).unwrap_err();
        let kinds: Vec<_> = errs.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NoFields,
                ValidationErrorKind::InvertedSeason,
                ValidationErrorKind::InvertedHours,
            ]
        );
    }

    #[test]
    fn test_empty_window_is_flagged() {
        let venues = vec![VenueAvailability::new("Lot", 2024)
            .with_day_hours(1, 9.0, 17.0)
            .with_day_hours(3, 12.0, 12.0)];
        let errs = validate_input(&[], &[], &venues).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ValidationErrorKind::InvertedHours);
        assert!(errs[0].message.contains("day 3"));
    }

    #[test]
    fn test_multiple_errors() {
        let teams = vec![TeamRecord::new("A", "X"), TeamRecord::new("A", "X")];
        let venues = vec![VenueAvailability::new("Lot", 2024).with_fields(0)];
        let errs = validate_input(&teams, &[], &venues).unwrap_err();
        // Two unknown-league errors, one duplicate, one venue
        assert_eq!(errs.len(), 4);
    }
}
