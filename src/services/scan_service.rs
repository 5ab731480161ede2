//! Scan service layer.
//!
//! Runs captured payloads through the classifier, keeps metrics, and streams
//! records for the command-line pipeline.

use crate::config::{Config, OutputFormat};
use crate::domain::TrackingNumber;
use crate::error::ScanResult;
use crate::matching::TrackingNumberClassifier;
use crate::metrics::Metrics;
use crate::models::{ScanLine, ScanOutcome};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Scan service trait for classifying captured payloads.
pub trait ScanService: Send + Sync {
    /// Classify one scan and record the outcome.
    fn process(&self, scan: &ScanLine) -> ScanOutcome;

    /// Metrics collected so far.
    fn metrics(&self) -> &Metrics;
}

/// Default implementation of ScanService.
#[derive(Debug, Clone, Default)]
pub struct ScanServiceImpl {
    classifier: TrackingNumberClassifier,
    metrics: Metrics,
}

impl ScanServiceImpl {
    /// Create a new scan service.
    pub fn new(classifier: TrackingNumberClassifier, metrics: Metrics) -> Self {
        Self {
            classifier,
            metrics,
        }
    }
}

impl ScanService for ScanServiceImpl {
    fn process(&self, scan: &ScanLine) -> ScanOutcome {
        // A named symbology means the payload came off a capture device
        let (raw_input, parsed) = match scan.barcode() {
            Some(barcode) => {
                let symbology = barcode.symbology();
                if !symbology.is_tracking_eligible() {
                    trace!("Ineligible {} scan", symbology);
                    self.metrics.record_ineligible();
                    return ScanOutcome::Ineligible {
                        raw_input: barcode.text().to_string(),
                        symbology,
                    };
                }
                (
                    barcode.text().to_string(),
                    TrackingNumber::from_barcode(&barcode),
                )
            }
            None => (scan.text.clone(), self.classifier.classify(&scan.text, None)),
        };

        match parsed {
            Some(tn) => {
                self.metrics.record_match(tn.carrier());
                ScanOutcome::Matched(tn)
            }
            None => {
                self.metrics.record_unmatched();
                ScanOutcome::Unmatched {
                    raw_input,
                    symbology: scan.symbology,
                }
            }
        }
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// Stream scan lines from `reader` through `service`, writing one record per
/// scan to `writer`.
///
/// Lines are decoded lossily; bytes that are not valid UTF-8 become U+FFFD
/// and the line is classified like any other.
///
/// # Returns
/// The number of scans processed (blank lines are not scans).
///
/// # Errors
/// Returns `ScanError` if reading input, serializing a record, or writing output fails.
pub fn run_scans<R, W>(
    service: &dyn ScanService,
    config: &Config,
    mut reader: R,
    mut writer: W,
) -> ScanResult<u64>
where
    R: BufRead,
    W: Write,
{
    let mut processed = 0u64;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let Some(scan) = ScanLine::parse(&line, config.default_symbology) else {
            continue;
        };

        let outcome = service.process(&scan);
        processed += 1;

        if !outcome.is_match() && !config.emit_unmatched {
            continue;
        }

        match config.output_format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut writer, &outcome)?;
                writeln!(writer)?;
            }
            OutputFormat::Text => writeln!(writer, "{}", outcome)?,
        }
    }

    writer.flush()?;
    debug!("Processed {} scans", processed);
    Ok(processed)
}
