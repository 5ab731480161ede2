//! Tracking Classifier - carrier tracking number recognition for scanned barcodes.
//!
//! Given the text decoded from a shipping label barcode (and, optionally, the
//! barcode's symbology), this library decides whether it is a UPS, USPS or
//! FedEx tracking number and extracts the canonical number with routing
//! prefixes removed.
//!
//! # Architecture
//!
//! - **domain**: Barcodes, symbologies, carriers and tracking numbers
//! - **matching**: The ordered carrier pattern table and classifier
//! - **models**: Scan pipeline input lines and outcomes
//! - **services**: Scan processing and streaming
//! - **metrics**: Classification counters
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use tracking_classifier::{CarrierType, Symbology, TrackingNumberClassifier};
//!
//! let classifier = TrackingNumberClassifier::new();
//! let tn = classifier
//!     .classify("420 12345 9400 1000 0000 0000 0000 00", Some(Symbology::Code128))
//!     .unwrap();
//! assert_eq!(tn.carrier(), CarrierType::Usps);
//! assert_eq!(tn.canonical_text(), "9400100000000000000000");
//!
//! assert!(classifier.classify("1Z999AA10123456784", Some(Symbology::Datamatrix)).is_none());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::{Config, OutputFormat};
pub use domain::{Barcode, CarrierType, Symbology, TrackingNumber};
pub use error::{ConfigError, ScanError, SymbologyError};
pub use matching::{carrier_patterns, CarrierPattern, TrackingNumberClassifier};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ScanLine, ScanOutcome};
pub use services::{run_scans, ScanService, ScanServiceImpl};
