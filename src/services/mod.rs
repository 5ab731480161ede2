//! Application service layer.
//!
//! Services orchestrate the classifier and metrics for callers that feed in
//! raw scans, such as the command-line pipeline.

mod scan_service;

pub use scan_service::{run_scans, ScanService, ScanServiceImpl};

// Re-export common types used by services
pub use crate::models::{ScanLine, ScanOutcome};
