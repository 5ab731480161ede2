//! Carrier tracking number matching.
//!
//! This module holds the ordered carrier pattern table and the classifier
//! that applies it to scanned text.

pub mod classifier;

pub use classifier::{
    carrier_patterns, strip_formatting, CarrierPattern, TrackingNumberClassifier,
};
