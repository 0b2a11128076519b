//! Configuration loaded from environment variables.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::parse_date;

pub const DATABASE_VAR: &str = "VET_CLINIC_DATABASE";
pub const LOG_VAR: &str = "VET_CLINIC_LOG";
pub const TODAY_VAR: &str = "VET_CLINIC_TODAY";

pub const DEFAULT_DATABASE_PATH: &str = "vet_clinic.sqlite3";
pub const DEFAULT_LOG_FILTER: &str = "vet_clinic_core=info";

/// Special database value selecting a throwaway in-memory store.
pub const IN_MEMORY: &str = ":memory:";

/// Configuration errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a date in YYYY-MM-DD format, got {value:?}")]
    InvalidDate { var: &'static str, value: String },
}

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

/// Clinic configuration.
///
/// | Env Var               | Default                 |
/// |-----------------------|-------------------------|
/// | `VET_CLINIC_DATABASE` | `vet_clinic.sqlite3`    |
/// | `VET_CLINIC_LOG`      | `vet_clinic_core=info`  |
/// | `VET_CLINIC_TODAY`    | unset (system date)     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    pub database: DatabaseLocation,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Pins the evaluation date used by date-sensitive validation
    pub today: Option<NaiveDate>,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            today: None,
        }
    }
}

impl ClinicConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database = match value(DATABASE_VAR) {
            Some(v) if v.trim() == IN_MEMORY => DatabaseLocation::InMemory,
            Some(v) => DatabaseLocation::File(PathBuf::from(v.trim())),
            None => DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH)),
        };

        let log_filter = value(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let today = value(TODAY_VAR)
            .map(|v| {
                parse_date(&v).ok_or(ConfigError::InvalidDate {
                    var: TODAY_VAR,
                    value: v,
                })
            })
            .transpose()?;

        Ok(Self {
            database,
            log_filter,
            today,
        })
    }
}
