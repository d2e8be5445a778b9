//! Server configuration from environment variables.

use std::path::PathBuf;

use pronunciation_core::MatchThresholds;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Invalid thresholds: {0}")]
    Thresholds(#[from] pronunciation_core::ConfigError),
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub thresholds: MatchThresholds,
    /// JSON scenario file replacing the builtin catalog.
    pub scenarios_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            thresholds: MatchThresholds::default(),
            scenarios_path: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognized env vars:
    /// - HOST: Bind address (default 0.0.0.0)
    /// - PORT: Bind port (default 3000)
    /// - MATCH_ACCEPT_THRESHOLD: Minimum score counted correct (default 80)
    /// - MATCH_CLOSE_THRESHOLD: Minimum score for "close" feedback (default 60)
    /// - SCENARIOS_PATH: Optional scenario JSON file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let thresholds = MatchThresholds {
            accept: parse_or(&lookup, "MATCH_ACCEPT_THRESHOLD", defaults.thresholds.accept)?,
            close: parse_or(&lookup, "MATCH_CLOSE_THRESHOLD", defaults.thresholds.close)?,
        };
        thresholds.validate()?;

        let scenarios_path = lookup("SCENARIOS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            thresholds,
            scenarios_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
