//! Error types for the tracking classifier.
//!
//! Classification itself never fails (a non-matching payload is simply `None`).
//! The errors here cover configuration loading, symbology names and the scan
//! pipeline's I/O.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when parsing a symbology name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbologyError {
    /// The name does not correspond to any known symbology
    #[error("Unknown symbology: {0}")]
    Unknown(String),
}

/// Errors that can occur while streaming scans through the pipeline.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Reading scan input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a scan record
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ScanError
pub type ScanResult<T> = Result<T, ScanError>;
