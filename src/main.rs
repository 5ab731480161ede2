//! Tracking Classifier - Main entry point
//!
//! Reads scanned barcode payloads from stdin, one per line, optionally
//! prefixed with a symbology name, and writes one classification record per
//! scan to stdout.

use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracking_classifier::{
    run_scans, Config, Metrics, ScanService, ScanServiceImpl, TrackingNumberClassifier,
};

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only; stdout carries the scan records)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Classifying scans from stdin (format: {}, emit unmatched: {})",
        config.output_format, config.emit_unmatched
    );

    let service = ScanServiceImpl::new(TrackingNumberClassifier::new(), Metrics::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let processed = run_scans(&service, &config, stdin.lock(), stdout.lock())?;

    let summary = service.metrics().summary();
    info!(
        processed,
        matched = summary.matched_total,
        unmatched = summary.unmatched_total,
        ineligible = summary.ineligible_total,
        "Scan summary: {}",
        serde_json::to_string(&summary.by_carrier)?
    );

    Ok(())
}
