//! Configuration management for the tracking classifier.
//!
//! This module handles loading and validating configuration from environment
//! variables. An optional `.env` file is honored via `dotenvy`.

use crate::domain::Symbology;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the scan pipeline renders each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,

    /// Human-readable `Display` output
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("Must be one of: json, text, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Configuration for the scan pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for scan records (default: json)
    pub output_format: OutputFormat,

    /// Whether non-matching scans are written out (default: true)
    pub emit_unmatched: bool,

    /// Symbology assumed for lines that do not name one (default: none)
    pub default_symbology: Option<Symbology>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SCAN_OUTPUT_FORMAT`: `json` or `text` (default: json)
    /// - `SCAN_EMIT_UNMATCHED`: write non-matching scans (default: true)
    /// - `SCAN_DEFAULT_SYMBOLOGY`: symbology for bare payloads (default: unset)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let output_format = match env::var("SCAN_OUTPUT_FORMAT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SCAN_OUTPUT_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        let emit_unmatched = Self::parse_env_bool("SCAN_EMIT_UNMATCHED", true)?;

        let default_symbology = match env::var("SCAN_DEFAULT_SYMBOLOGY") {
            Ok(val) if !val.trim().is_empty() => Some(val.parse::<Symbology>().map_err(|e| {
                ConfigError::InvalidValue {
                    var: "SCAN_DEFAULT_SYMBOLOGY".to_string(),
                    reason: e.to_string(),
                }
            })?),
            _ => None,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            output_format,
            emit_unmatched,
            default_symbology,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::Json,
            emit_unmatched: true,
            default_symbology: None,
            log_level: "error".to_string(),
        }
    }
}
