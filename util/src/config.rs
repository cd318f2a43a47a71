//! Seeder configuration.
//!
//! `AppConfig` holds every runtime value the seeder reads from the
//! environment. Values come from a local `.env` file first and then from the
//! process environment. Parsing goes through [`AppConfig::from_lookup`] so it
//! can be exercised without touching the real environment.

use std::env;
use thiserror::Error;

/// Database used when neither `MONGO_DATABASE` nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "backoffice";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Represents the complete seeder configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    /// File name for the daily-rolling log under `logs/`. Stdout only when `None`.
    pub log_file: Option<String>,
    pub mongo_uri: String,
    /// Explicit database name. Falls back to the one in `mongo_uri`, then [`DEFAULT_DATABASE`].
    pub mongo_database: Option<String>,
    pub seed_cash_expenditures: bool,
    /// Fixed RNG seed for reproducible sample data.
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            env: get("APP_ENV").unwrap_or_else(|| "development".into()),
            project_name: get("PROJECT_NAME").unwrap_or_else(|| "backoffice-seeder".into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "seeder=info,db=info".into()),
            log_file: get("LOG_FILE"),
            mongo_uri: get("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?,
            mongo_database: get("MONGO_DATABASE"),
            seed_cash_expenditures: match get("SEED_CASH_EXPENDITURES") {
                Some(value) => parse_flag("SEED_CASH_EXPENDITURES", &value)?,
                None => false,
            },
            rng_seed: match get("SEED_RNG_SEED") {
                Some(value) => Some(value.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "SEED_RNG_SEED",
                    value,
                })?),
                None => None,
            },
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
