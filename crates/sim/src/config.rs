//! Simulator configuration, read from environment variables.

use std::path::PathBuf;

use gildedrose_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

/// Number of days simulated when `GILDED_ROSE_DAYS` is unset.
pub const DEFAULT_DAYS: u32 = 2;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const FIXTURE_VAR: &str = "GILDED_ROSE_FIXTURE";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidDays { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: UnknownLogFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Days to advance after the initial report.
    pub days: u32,
    /// JSON stock list; the built-in stock is used when absent.
    pub fixture: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            fixture: None,
            log_format: LogFormat::default(),
        }
    }
}

impl SimConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(DAYS_VAR) {
            config.days = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDays {
                    var: DAYS_VAR,
                    value,
                })?;
        }

        config.fixture = get(FIXTURE_VAR).map(PathBuf::from);

        if let Some(value) = get(LOG_FORMAT_VAR) {
            config.log_format = value
                .parse()
                .map_err(|source| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    source,
                })?;
        }

        Ok(config)
    }
}
