//! Data models for the scan pipeline.
//!
//! This module contains the records read from and written by the scan
//! pipeline, built on top of the domain value objects.

pub mod scan;

pub use scan::{ScanLine, ScanOutcome};
