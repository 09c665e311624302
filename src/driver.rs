//! Case runner: load → validate → pair → schedule → write.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::{FixtureError, Result};
use crate::io::{load_case, write_outcome};
use crate::pairing::generate_matchups;
use crate::scheduler::{ScheduleEngine, ScheduleKpi};
use crate::validation::validate_input;

/// Summary of one case run.
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// Case name (directory file name).
    pub case: String,
    /// Directory the outputs were written to.
    pub dir: PathBuf,
    /// Matchups generated by pairing.
    pub matchups: usize,
    /// Input problems found by validation (the run continues regardless).
    pub validation_problems: usize,
    /// Rule violations found re-checking the outcome. Zero for any engine run.
    pub violations: usize,
    /// Outcome metrics.
    pub kpi: ScheduleKpi,
}

impl CaseReport {
    /// Number of placed games.
    pub fn placed(&self) -> usize {
        self.kpi.placed
    }

    /// Number of matchups left unscheduled.
    pub fn unscheduled(&self) -> usize {
        self.kpi.unscheduled
    }
}

/// Case name used for per-case configuration lookup.
pub fn case_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

/// Runs one case directory end to end and writes its outputs next to the
/// inputs.
///
/// Fails only when the inputs cannot be loaded or the outputs cannot be
/// written. Validation problems and unscheduled matchups are logged.
pub fn run_case(dir: &Path, config: &RunConfig) -> Result<CaseReport> {
    if dir.exists() && !dir.is_dir() {
        return Err(FixtureError::InvalidInput(format!(
            "{} is not a case directory",
            dir.display()
        )));
    }
    let case = case_name(dir);
    let config = config.for_case(&case);
    let data = load_case(dir)?;

    let validation_problems = match validate_input(&data.teams, &data.leagues, &data.venues) {
        Ok(()) => 0,
        Err(errors) => {
            for e in &errors {
                warn!("{case}: {e}");
            }
            errors.len()
        }
    };

    let matchups = generate_matchups(&data.teams, &data.leagues, config.game_limit);
    let engine = ScheduleEngine::new(config.engine.clone());
    let outcome = engine.schedule(&matchups, &data.venues);

    for m in &outcome.unscheduled {
        warn!(
            "{case}: could not schedule {} vs {} ({})",
            m.team1, m.team2, m.league
        );
    }

    let violations = outcome.verify(&data.venues);
    for v in &violations {
        warn!("{case}: {:?} on {}: {}", v.violation_type, v.entity_id, v.message);
    }

    write_outcome(dir, &outcome)?;

    let kpi = ScheduleKpi::calculate(&outcome, &data.venues);
    info!(
        "{case}: placed {}/{} matchups, weeks {:?}..={:?}, avg field utilization {:.1}%",
        kpi.placed,
        matchups.len(),
        kpi.first_week,
        kpi.last_week,
        kpi.avg_utilization * 100.0
    );
    if let Some((fewest, most)) = kpi.games_per_team_range() {
        info!("{case}: teams play between {fewest} and {most} games");
    }

    Ok(CaseReport {
        case,
        dir: dir.to_path_buf(),
        matchups: matchups.len(),
        validation_problems,
        violations: violations.len(),
        kpi,
    })
}

/// Runs several cases; a failing case is logged and does not stop the rest.
pub fn run_cases(dirs: &[PathBuf], config: &RunConfig) -> Vec<Result<CaseReport>> {
    dirs.iter()
        .map(|dir| {
            let result = run_case(dir, config);
            if let Err(e) = &result {
                warn!("Skipping case {}: {}", dir.display(), e);
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{write_case, CaseData, SCHEDULE_FILE};
    use crate::logging::init_for_tests;
    use crate::models::{LeagueRecord, TeamRecord, VenueAvailability};

    fn sample_case() -> CaseData {
        CaseData {
            teams: vec![
                TeamRecord::new("A", "L1"),
                TeamRecord::new("B", "L1"),
                TeamRecord::new("C", "L1"),
            ],
            leagues: vec![LeagueRecord::new("L1", "Rec")],
            venues: vec![VenueAvailability::new("Park", 2024)
                .with_season(1, 4)
                .with_fields(1)
                .with_uniform_hours(9.0, 13.0)],
        }
    }

    #[test]
    fn test_run_case_end_to_end() {
        init_for_tests();
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("case1");
        write_case(&dir, &sample_case()).unwrap();

        let report = run_case(&dir, &RunConfig::default()).unwrap();
        assert_eq!(report.case, "case1");
        assert_eq!(report.matchups, 3);
        assert_eq!(report.placed(), 3);
        assert_eq!(report.unscheduled(), 0);
        assert_eq!(report.validation_problems, 0);
        assert_eq!(report.violations, 0);
        assert!(dir.join(SCHEDULE_FILE).is_file());
    }

    #[test]
    fn test_run_case_applies_case_override() {
        init_for_tests();
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("small");
        write_case(&dir, &sample_case()).unwrap();

        let config = RunConfig::from_toml("[cases.small]\ngame_limit = { fixed = 1 }").unwrap();
        let report = run_case(&dir, &config).unwrap();
        assert_eq!(report.matchups, 1);
    }

    #[test]
    fn test_run_cases_continues_after_failure() {
        init_for_tests();
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("good");
        write_case(&good, &sample_case()).unwrap();
        let missing = tmp.path().join("missing");

        let results = run_cases(&[missing, good], &RunConfig::default());
        assert_eq!(results.len(), 2);
        assert!(results[0].as_ref().is_err_and(|e| e.is_missing_input()));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_run_case_rejects_file_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("teams.json");
        std::fs::write(&file, "[]").unwrap();

        let err = run_case(&file, &RunConfig::default()).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidInput(_)));
    }

    #[test]
    fn test_case_name() {
        assert_eq!(case_name(Path::new("data/case3")), "case3");
    }
}
