//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default on-screen text budget for hi-fi frames
pub const DEFAULT_HIFI_MAX_WORDS: usize = 7;

/// Output format for the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Validation(format!(
                "Unknown log format: {}. Supported formats: pretty, json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the exporter writes project and storyboard artifacts into
    pub export_dir: PathBuf,

    /// Word budget for on-screen text in hi-fi frames
    pub hifi_max_words: usize,

    /// Runtime configuration
    pub log_format: LogFormat,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("exports"),
            hifi_max_words: DEFAULT_HIFI_MAX_WORDS,
            log_format: LogFormat::default(),
            rust_log: "admock=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let hifi_max_words = match env::var("ADMOCK_HIFI_MAX_WORDS") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::Validation(format!(
                        "ADMOCK_HIFI_MAX_WORDS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            Err(_) => defaults.hifi_max_words,
        };

        let log_format = match env::var("ADMOCK_LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.log_format,
        };

        let config = Self {
            export_dir: env::var("ADMOCK_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            hifi_max_words,
            log_format,
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        };

        Ok(config)
    }
}
