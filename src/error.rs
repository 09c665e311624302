//! Run-level error types.
//!
//! Only the collaborators around the engine (case loading, configuration,
//! output writing) fail with these. The scheduling engine never returns an
//! error: a matchup that cannot be placed is reported in
//! [`ScheduleOutcome::unscheduled`](crate::scheduler::ScheduleOutcome).

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced before or after a scheduling run.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing input file: {0}")]
    MissingFile(PathBuf),

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        FixtureError::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        FixtureError::Csv {
            path: path.into(),
            source,
        }
    }

    /// Whether the error comes from absent source data rather than bad content.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, FixtureError::MissingFile(_))
    }
}

impl From<toml::de::Error> for FixtureError {
    fn from(err: toml::de::Error) -> Self {
        FixtureError::Config(err.to_string())
    }
}

/// Result alias for run-level operations.
pub type Result<T> = std::result::Result<T, FixtureError>;
