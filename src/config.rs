use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a valid number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
    /// Directory holding the catalog JSON files. `None` serves the built-in catalog.
    pub data_dir: Option<PathBuf>,
    /// Artificial pause before answering a search, in place of a backend round trip.
    pub search_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
            data_dir: None,
            search_delay: Duration::ZERO,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: value("HOST").unwrap_or(defaults.host),
            port: parse_or(value("PORT"), "PORT", defaults.port)?,
            max_workers: parse_or(value("MAX_WORKERS"), "MAX_WORKERS", defaults.max_workers)?,
            data_dir: value("DATA_DIR").map(PathBuf::from),
            search_delay: Duration::from_millis(parse_or(
                value("SEARCH_DELAY_MS"),
                "SEARCH_DELAY_MS",
                0u64,
            )?),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: v }),
    }
}
