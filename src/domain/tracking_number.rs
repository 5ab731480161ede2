//! TrackingNumber value object.

use super::barcode::Barcode;
use super::carrier::CarrierType;
use super::symbology::Symbology;
use crate::matching::TrackingNumberClassifier;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A carrier tracking number recognized in scanned text.
///
/// Instances are only produced by [`TrackingNumberClassifier`], so the
/// canonical text is always consistent with the carrier and the raw input.
///
/// # Example
///
/// ```
/// use tracking_classifier::domain::{CarrierType, Symbology, TrackingNumber};
///
/// let tn = TrackingNumber::parse("1Z999AA10123456784", Some(Symbology::Code128)).unwrap();
/// assert_eq!(tn.carrier(), CarrierType::Ups);
/// assert_eq!(tn.canonical_text(), "1Z999AA10123456784");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrackingNumber {
    carrier: CarrierType,
    raw_input: String,
    canonical_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_symbology: Option<Symbology>,
}

impl TrackingNumber {
    pub(crate) fn new(
        carrier: CarrierType,
        raw_input: impl Into<String>,
        canonical_text: impl Into<String>,
        source_symbology: Option<Symbology>,
    ) -> Self {
        Self {
            carrier,
            raw_input: raw_input.into(),
            canonical_text: canonical_text.into(),
            source_symbology,
        }
    }

    /// Classify `raw_text` (see [`TrackingNumberClassifier::classify`]).
    pub fn parse(raw_text: &str, symbology: Option<Symbology>) -> Option<Self> {
        TrackingNumberClassifier::new().classify(raw_text, symbology)
    }

    /// Whether `text` is recognized as a tracking number when no symbology is known.
    pub fn is_parsable(text: &str) -> bool {
        TrackingNumberClassifier::new().is_parsable(text)
    }

    /// Classify a captured barcode using its own symbology.
    pub fn from_barcode(barcode: &Barcode) -> Option<Self> {
        Self::parse(barcode.text(), Some(barcode.symbology()))
    }

    pub fn carrier(&self) -> CarrierType {
        self.carrier
    }

    /// The text exactly as it was scanned.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The tracking number with routing prefixes and formatting removed.
    pub fn canonical_text(&self) -> &str {
        &self.canonical_text
    }

    pub fn source_symbology(&self) -> Option<Symbology> {
        self.source_symbology
    }
}

/// Wire shape used when reading a serialized tracking number back.
#[derive(Debug, Deserialize)]
struct TrackingNumberRecord {
    carrier: CarrierType,
    raw_input: String,
    canonical_text: String,
    #[serde(default)]
    source_symbology: Option<Symbology>,
}

// Serde support - deserialize by re-classifying the raw input
impl<'de> Deserialize<'de> for TrackingNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = TrackingNumberRecord::deserialize(deserializer)?;
        let parsed = TrackingNumber::parse(&record.raw_input, record.source_symbology)
            .ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "Not a tracking number: {}",
                    record.raw_input
                ))
            })?;

        if parsed.carrier != record.carrier || parsed.canonical_text != record.canonical_text {
            return Err(serde::de::Error::custom(format!(
                "Tracking number {} classifies as {} '{}', not {} '{}'",
                record.raw_input,
                parsed.carrier,
                parsed.canonical_text,
                record.carrier,
                record.canonical_text
            )));
        }

        Ok(parsed)
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_symbology {
            Some(symbology) => write!(
                f,
                "'{}' [{} - {}]",
                self.canonical_text, self.carrier, symbology
            ),
            None => write!(f, "'{}' [{}]", self.canonical_text, self.carrier),
        }
    }
}
