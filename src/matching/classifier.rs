//! Tracking number classification.
//!
//! Scanned text is reduced to its ASCII letters and digits and then tested
//! against a fixed, ordered table of carrier patterns. The first pattern that
//! matches the whole candidate wins; later rows are never consulted. Several
//! patterns overlap (a 22-digit USPS number is also 22 digits of something
//! else), so the table order is part of the contract.

use crate::domain::{CarrierType, Symbology, TrackingNumber};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Name of the capture group holding the canonical tracking number.
const CANONICAL_GROUP: &str = "tn";

/// One row of the carrier pattern table.
#[derive(Debug)]
pub struct CarrierPattern {
    /// Carrier reported when this row matches
    pub carrier: CarrierType,

    /// Short human-readable label for the format
    pub label: &'static str,

    /// Anchored pattern; the `tn` group is the canonical text
    pub regex: Regex,
}

impl CarrierPattern {
    fn new(carrier: CarrierType, label: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Failed to compile {} pattern: {}", label, e));
        Self {
            carrier,
            label,
            regex,
        }
    }

    /// Pattern source, for diagnostics.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Match a pre-stripped candidate, returning the canonical text.
    fn canonical<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        self.regex
            .captures(candidate)
            .and_then(|caps| caps.name(CANONICAL_GROUP))
            .map(|m| m.as_str())
    }
}

static CARRIER_PATTERNS: Lazy<Vec<CarrierPattern>> = Lazy::new(|| {
    vec![
        CarrierPattern::new(CarrierType::Ups, "UPS", r"^(?P<tn>1Z[0-9A-Z]{16})$"),
        CarrierPattern::new(
            CarrierType::UpsSurePost,
            "UPS SurePost",
            r"^(?:420[0-9]{5})?(?P<tn>92[0-9]{24})$",
        ),
        CarrierPattern::new(
            CarrierType::Usps,
            "USPS",
            r"^(?:420[0-9]{5})?(?P<tn>9[234]0[0-9]{19})$",
        ),
        CarrierPattern::new(CarrierType::Fedex, "FedEx 20-digit", r"^(?P<tn>[0-9]{20})$"),
        CarrierPattern::new(
            CarrierType::Fedex,
            "FedEx 12-digit",
            r"^(?:[0-9]{22})?(?P<tn>[0-9]{12})$",
        ),
        CarrierPattern::new(
            CarrierType::FedexSmartPost,
            "FedEx SmartPost",
            r"^(?:420[0-9]{5})?(?P<tn>92[0-9]{20})$",
        ),
    ]
});

/// The carrier pattern table, in evaluation order.
pub fn carrier_patterns() -> &'static [CarrierPattern] {
    &CARRIER_PATTERNS
}

/// Remove every character that is not an ASCII letter or digit.
pub fn strip_formatting(raw_text: &str) -> String {
    raw_text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Stateless tracking number classifier.
///
/// Cheap to construct and safe to share across threads; the pattern table is
/// compiled once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingNumberClassifier;

impl TrackingNumberClassifier {
    /// Create a new TrackingNumberClassifier.
    pub fn new() -> Self {
        Self
    }

    /// Whether `text` classifies as a tracking number with no symbology given.
    pub fn is_parsable(&self, text: &str) -> bool {
        self.classify(text, None).is_some()
    }

    /// Classify scanned text as a carrier tracking number.
    ///
    /// # Arguments
    /// * `raw_text` - Text as decoded by the scanner, formatting included
    /// * `symbology` - Barcode symbology, if known. Symbologies that never carry
    ///   bare tracking numbers (e.g. Data Matrix) are rejected without matching.
    ///
    /// # Returns
    /// The first carrier pattern match, or `None` when nothing matches.
    pub fn classify(
        &self,
        raw_text: &str,
        symbology: Option<Symbology>,
    ) -> Option<TrackingNumber> {
        if let Some(symbology) = symbology {
            if !symbology.is_tracking_eligible() {
                trace!("Skipping {} payload for tracking classification", symbology);
                return None;
            }
        }

        let candidate = strip_formatting(raw_text);
        if candidate.is_empty() {
            return None;
        }

        for pattern in carrier_patterns() {
            if let Some(canonical) = pattern.canonical(&candidate) {
                debug!(
                    carrier = %pattern.carrier,
                    format = pattern.label,
                    "Classified tracking number {}",
                    canonical
                );
                return Some(TrackingNumber::new(
                    pattern.carrier,
                    raw_text,
                    canonical,
                    symbology,
                ));
            }
        }

        trace!("No carrier pattern matched {:?}", candidate);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_table_order() {
        let carriers: Vec<CarrierType> = carrier_patterns().iter().map(|p| p.carrier).collect();
        assert_eq!(
            carriers,
            vec![
                CarrierType::Ups,
                CarrierType::UpsSurePost,
                CarrierType::Usps,
                CarrierType::Fedex,
                CarrierType::Fedex,
                CarrierType::FedexSmartPost,
            ]
        );
    }

    #[test]
    fn test_every_pattern_is_anchored_with_canonical_group() {
        for pattern in carrier_patterns() {
            assert!(pattern.pattern().starts_with('^'), "{}", pattern.label);
            assert!(pattern.pattern().ends_with('$'), "{}", pattern.label);
            assert!(
                pattern
                    .regex
                    .capture_names()
                    .any(|name| name == Some(CANONICAL_GROUP)),
                "{} has no canonical group",
                pattern.label
            );
        }
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("1Z 999-AA1.01"), "1Z999AA101");
        assert_eq!(strip_formatting("\u{1d}420\u{1d}92"), "42092");
        assert_eq!(strip_formatting("é9ü2"), "92");
        assert_eq!(strip_formatting("--- ..."), "");
    }

    #[test]
    fn test_ups() {
        let tn = TrackingNumberClassifier::new()
            .classify("1Z999AA10123456784", Some(Symbology::Code128))
            .unwrap();
        assert_eq!(tn.carrier(), CarrierType::Ups);
        assert_eq!(tn.canonical_text(), "1Z999AA10123456784");
    }

    #[test]
    fn test_ups_requires_uppercase() {
        let classifier = TrackingNumberClassifier::new();
        assert!(classifier.classify("1z999aa10123456784", None).is_none());
        assert!(classifier.classify("1Z999AA1012345678", None).is_none());
    }

    #[test]
    fn test_usps_strips_routing_prefix() {
        let tn = TrackingNumberClassifier::new()
            .classify("420 12345 9400 1000 0000 0000 0000 00", None)
            .unwrap();
        assert_eq!(tn.carrier(), CarrierType::Usps);
        assert_eq!(tn.canonical_text(), "9400100000000000000000");
    }

    #[test]
    fn test_usps_wins_over_smartpost_on_920() {
        let tn = TrackingNumberClassifier::new()
            .classify("9202345678901234567890", None)
            .unwrap();
        assert_eq!(tn.carrier(), CarrierType::Usps);
    }

    #[test]
    fn test_smartpost() {
        let tn = TrackingNumberClassifier::new()
            .classify("420987659261234567890123456789", None)
            .unwrap();
        assert_eq!(tn.carrier(), CarrierType::FedexSmartPost);
        assert_eq!(tn.canonical_text(), "9261234567890123456789");
    }

    #[test]
    fn test_empty_and_ineligible() {
        let classifier = TrackingNumberClassifier::new();
        assert!(classifier.classify("", None).is_none());
        assert!(classifier
            .classify("123456789012", Some(Symbology::Code39))
            .is_none());
        assert!(classifier
            .classify("123456789012", Some(Symbology::Invalid))
            .is_none());
    }
}
