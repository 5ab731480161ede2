//! Basic metrics instrumentation for scan classification.
//!
//! Provides counters for processed scans, their outcomes, and matches per carrier.

use crate::domain::CarrierType;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for scan classification. Clones share the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of scans processed
    scans_total: Arc<AtomicU64>,

    /// Scans classified as a tracking number
    matched_total: Arc<AtomicU64>,

    /// Eligible scans that matched no carrier pattern
    unmatched_total: Arc<AtomicU64>,

    /// Scans skipped because of their symbology
    ineligible_total: Arc<AtomicU64>,

    /// Matches per carrier, indexed like `CarrierType::ALL`
    carrier_matches: Arc<[AtomicU64; 5]>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

fn carrier_index(carrier: CarrierType) -> usize {
    match carrier {
        CarrierType::Ups => 0,
        CarrierType::UpsSurePost => 1,
        CarrierType::Usps => 2,
        CarrierType::Fedex => 3,
        CarrierType::FedexSmartPost => 4,
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            scans_total: Arc::new(AtomicU64::new(0)),
            matched_total: Arc::new(AtomicU64::new(0)),
            unmatched_total: Arc::new(AtomicU64::new(0)),
            ineligible_total: Arc::new(AtomicU64::new(0)),
            carrier_matches: Arc::new(Default::default()),
        }
    }

    /// Record a scan classified as `carrier`.
    pub fn record_match(&self, carrier: CarrierType) {
        self.scans_total.fetch_add(1, Ordering::Relaxed);
        self.matched_total.fetch_add(1, Ordering::Relaxed);
        self.carrier_matches[carrier_index(carrier)].fetch_add(1, Ordering::Relaxed);
    }

    /// Record an eligible scan that matched nothing.
    pub fn record_unmatched(&self) {
        self.scans_total.fetch_add(1, Ordering::Relaxed);
        self.unmatched_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a scan skipped because of its symbology.
    pub fn record_ineligible(&self) {
        self.scans_total.fetch_add(1, Ordering::Relaxed);
        self.ineligible_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total scans processed.
    pub fn scans_total(&self) -> u64 {
        self.scans_total.load(Ordering::Relaxed)
    }

    /// Get total matched scans.
    pub fn matched_total(&self) -> u64 {
        self.matched_total.load(Ordering::Relaxed)
    }

    /// Get total unmatched scans.
    pub fn unmatched_total(&self) -> u64 {
        self.unmatched_total.load(Ordering::Relaxed)
    }

    /// Get total ineligible scans.
    pub fn ineligible_total(&self) -> u64 {
        self.ineligible_total.load(Ordering::Relaxed)
    }

    /// Get matches recorded for a single carrier.
    pub fn carrier_matches(&self, carrier: CarrierType) -> u64 {
        self.carrier_matches[carrier_index(carrier)].load(Ordering::Relaxed)
    }

    /// Fraction of scans that produced a tracking number (0.0 when idle).
    pub fn match_rate(&self) -> f64 {
        let scans = self.scans_total();
        if scans == 0 {
            0.0
        } else {
            self.matched_total() as f64 / scans as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.scans_total.store(0, Ordering::Relaxed);
        self.matched_total.store(0, Ordering::Relaxed);
        self.unmatched_total.store(0, Ordering::Relaxed);
        self.ineligible_total.store(0, Ordering::Relaxed);
        for counter in self.carrier_matches.iter() {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            scans_total: self.scans_total(),
            matched_total: self.matched_total(),
            unmatched_total: self.unmatched_total(),
            ineligible_total: self.ineligible_total(),
            match_rate: self.match_rate(),
            by_carrier: CarrierType::ALL
                .iter()
                .map(|&carrier| (carrier.to_string(), self.carrier_matches(carrier)))
                .filter(|(_, count)| *count > 0)
                .collect(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub scans_total: u64,
    pub matched_total: u64,
    pub unmatched_total: u64,
    pub ineligible_total: u64,
    pub match_rate: f64,
    pub by_carrier: BTreeMap<String, u64>,
}
