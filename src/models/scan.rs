//! Scan input lines and classification outcomes.

use crate::domain::{Barcode, Symbology, TrackingNumber};
use serde::Serialize;
use std::fmt;

/// One scan read from the pipeline input.
///
/// Input lines look like `code128 1Z999AA10123456784`, `ean128<TAB>...`, or a
/// bare payload. The leading token only counts as a symbology when it names one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLine {
    /// Symbology named on the line, or the configured default
    pub symbology: Option<Symbology>,

    /// Payload text with surrounding whitespace trimmed
    pub text: String,
}

impl ScanLine {
    /// Parse an input line. Returns `None` for blank lines.
    pub fn parse(line: &str, default_symbology: Option<Symbology>) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some((head, rest)) = line.split_once(char::is_whitespace) {
            let rest = rest.trim();
            if !rest.is_empty() {
                if let Ok(symbology) = head.parse::<Symbology>() {
                    return Some(Self {
                        symbology: Some(symbology),
                        text: rest.to_string(),
                    });
                }
            }
        }

        Some(Self {
            symbology: default_symbology,
            text: line.to_string(),
        })
    }

    /// The line as a captured barcode, when its symbology is known.
    pub fn barcode(&self) -> Option<Barcode> {
        self.symbology
            .map(|symbology| Barcode::new(symbology, &self.text))
    }
}

/// Result of running one scan through the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The payload is a carrier tracking number
    Matched(TrackingNumber),

    /// The payload was classified but matched no carrier pattern
    Unmatched {
        raw_input: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        symbology: Option<Symbology>,
    },

    /// The symbology never carries tracking numbers, so nothing was attempted
    Ineligible {
        raw_input: String,
        symbology: Symbology,
    },
}

impl ScanOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn tracking_number(&self) -> Option<&TrackingNumber> {
        match self {
            Self::Matched(tn) => Some(tn),
            _ => None,
        }
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched(tn) => write!(f, "{}", tn),
            Self::Unmatched {
                raw_input,
                symbology: Some(symbology),
            } => write!(f, "'{}' [no match - {}]", raw_input, symbology),
            Self::Unmatched {
                raw_input,
                symbology: None,
            } => write!(f, "'{}' [no match]", raw_input),
            Self::Ineligible {
                raw_input,
                symbology,
            } => write!(f, "'{}' [skipped - {}]", raw_input, symbology),
        }
    }
}
