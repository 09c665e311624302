//! Run configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) is a valid configuration:
//!
//! ```toml
//! game_limit = "from_league"
//!
//! [engine]
//! game_duration_hours = 2.0
//! max_week = 52
//!
//! [engine.slot_policy]
//! kind = "fixed"
//! slots = [{ start = 9.0, end = 11.0 }, { start = 14.0, end = 16.0 }]
//!
//! # Per-case adjustments, keyed by case directory name.
//! [cases.case3]
//! fields_override = 1
//! game_limit = { fixed = 120 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FixtureError, Result};
use crate::pairing::GameLimit;
use crate::scheduler::{EngineConfig, MIN_GAME_DURATION_HOURS};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "u-fixture.toml";

/// Settings for scheduling one or more cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Engine parameters.
    pub engine: EngineConfig,
    /// How many matchups each league contributes.
    pub game_limit: GameLimit,
    /// Adjustments applied when running a case with a matching name.
    pub cases: BTreeMap<String, CaseOverride>,
}

/// Per-case adjustments on top of [`RunConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseOverride {
    /// Game length in hours.
    pub game_duration_hours: Option<f64>,
    /// Cap on the fields used at every venue.
    pub fields_override: Option<u32>,
    /// Last week searched.
    pub max_week: Option<u32>,
    /// How many matchups each league contributes.
    pub game_limit: Option<GameLimit>,
}

impl CaseOverride {
    fn apply_to(&self, config: &mut RunConfig) {
        if let Some(d) = self.game_duration_hours {
            config.engine.game_duration_hours = d;
        }
        if let Some(f) = self.fields_override {
            config.engine.fields_override = Some(f);
        }
        if let Some(w) = self.max_week {
            config.engine.max_week = w;
        }
        if let Some(limit) = self.game_limit {
            config.game_limit = limit;
        }
    }

    /// Copies every value set in `other` over this one.
    fn merge(&mut self, other: &CaseOverride) {
        if other.game_duration_hours.is_some() {
            self.game_duration_hours = other.game_duration_hours;
        }
        if other.fields_override.is_some() {
            self.fields_override = other.fields_override;
        }
        if other.max_week.is_some() {
            self.max_week = other.max_week;
        }
        if other.game_limit.is_some() {
            self.game_limit = other.game_limit;
        }
    }
}

impl RunConfig {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// file in the working directory is used when present; a broken default
    /// file is logged and ignored.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            match Self::load_from_file(&local) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local.display(), e);
                }
            }
        }

        Ok(Self::default())
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FixtureError::MissingFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Effective configuration for the case named `case`.
    ///
    /// Fields set in the matching `[cases.<name>]` table replace the
    /// top-level values. The returned config has no per-case table.
    pub fn for_case(&self, case: &str) -> RunConfig {
        let mut effective = RunConfig {
            engine: self.engine.clone(),
            game_limit: self.game_limit,
            cases: BTreeMap::new(),
        };
        if let Some(o) = self.cases.get(case) {
            o.apply_to(&mut effective);
        }
        effective
    }

    /// Applies `o` at the top level and inside every per-case table, so its
    /// values win for every case. Used for command-line flags.
    pub fn override_all(&mut self, o: &CaseOverride) {
        self.cases.values_mut().for_each(|c| c.merge(o));
        o.apply_to(self);
    }

    /// Rejects game durations that are not finite or are shorter than
    /// [`MIN_GAME_DURATION_HOURS`], at the top level and in every case.
    pub fn check(&self) -> Result<()> {
        let durations = std::iter::once(Some(self.engine.game_duration_hours))
            .chain(self.cases.values().map(|o| o.game_duration_hours))
            .flatten();
        for d in durations {
            if !(d.is_finite() && d >= MIN_GAME_DURATION_HOURS) {
                return Err(FixtureError::Config(format!(
                    "game_duration_hours must be at least {MIN_GAME_DURATION_HOURS}, got {d}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use crate::scheduler::SlotPolicy;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.game_limit, GameLimit::FromLeague);
        assert!(config.cases.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RunConfig::from_toml("").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let content = r#"
game_limit = { fixed = 28 }

[engine]
game_duration_hours = 1.5
max_week = 30

[engine.slot_policy]
kind = "fixed"
slots = [{ start = 9.0, end = 11.0 }, { start = 14.0, end = 16.0 }]

[cases.case3]
fields_override = 1
game_limit = { fixed = 120 }
"#;
        let config = RunConfig::from_toml(content).unwrap();
        assert_eq!(config.game_limit, GameLimit::Fixed(28));
        assert!((config.engine.game_duration_hours - 1.5).abs() < 1e-10);
        assert_eq!(config.engine.max_week, 30);
        assert_eq!(config.engine.fields_override, None);
        assert_eq!(
            config.engine.slot_policy,
            SlotPolicy::Fixed {
                slots: vec![TimeWindow::new(9.0, 11.0), TimeWindow::new(14.0, 16.0)]
            }
        );

        let case3 = config.for_case("case3");
        assert_eq!(case3.engine.fields_override, Some(1));
        assert_eq!(case3.game_limit, GameLimit::Fixed(120));
        assert_eq!(case3.engine.max_week, 30);

        let case1 = config.for_case("case1");
        assert_eq!(case1.engine.fields_override, None);
        assert_eq!(case1.game_limit, GameLimit::Fixed(28));
    }

    #[test]
    fn test_game_limit_forms() {
        let config = RunConfig::from_toml(r#"game_limit = "all""#).unwrap();
        assert_eq!(config.game_limit, GameLimit::All);
        let config = RunConfig::from_toml(r#"game_limit = { split_total = 84 }"#).unwrap();
        assert_eq!(config.game_limit, GameLimit::SplitTotal(84));
    }

    #[test]
    fn test_override_all_beats_case_table() {
        let mut config =
            RunConfig::from_toml("[cases.case3]\nfields_override = 1\nmax_week = 10").unwrap();
        config.override_all(&CaseOverride {
            fields_override: Some(3),
            ..Default::default()
        });
        assert_eq!(config.engine.fields_override, Some(3));
        let case3 = config.for_case("case3");
        assert_eq!(case3.engine.fields_override, Some(3));
        assert_eq!(case3.engine.max_week, 10);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let err = RunConfig::from_toml("[engine]\ngame_duration_hours = 0.0").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }

    #[test]
    fn test_tiny_duration_rejected() {
        let err = RunConfig::from_toml("[engine]\ngame_duration_hours = 1e-9").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));

        let err =
            RunConfig::from_toml("[cases.case2]\ngame_duration_hours = 0.1").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));

        assert!(RunConfig::from_toml("[engine]\ngame_duration_hours = 0.25").is_ok());
    }

    #[test]
    fn test_check_catches_overridden_duration() {
        let mut config = RunConfig::from_toml("[cases.case1]\nmax_week = 10").unwrap();
        config.override_all(&CaseOverride {
            game_duration_hours: Some(1e-9),
            ..Default::default()
        });
        assert!(matches!(config.check(), Err(FixtureError::Config(_))));

        config.override_all(&CaseOverride {
            game_duration_hours: Some(1.5),
            ..Default::default()
        });
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = RunConfig::from_toml("engine = 3").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = RunConfig::load(Some(Path::new("/nonexistent/u-fixture.toml"))).unwrap_err();
        assert!(err.is_missing_input());
    }
}
