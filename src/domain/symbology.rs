//! Barcode symbology tags.

use crate::error::SymbologyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The encoding scheme a barcode payload was decoded from.
///
/// Only the symbologies the capture layer actually enables are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Invalid,
    Code39,
    Code128,
    /// Also used for EAN-13, which the capture layer remaps to UPC-A
    Upca,
    Ean128,
    /// Two-dimensional matrix code; carries structured data, never a bare tracking number
    Datamatrix,
}

impl Symbology {
    pub const ALL: [Symbology; 6] = [
        Symbology::Invalid,
        Symbology::Code39,
        Symbology::Code128,
        Symbology::Upca,
        Symbology::Ean128,
        Symbology::Datamatrix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Code39 => "code39",
            Self::Code128 => "code128",
            Self::Upca => "upca",
            Self::Ean128 => "ean128",
            Self::Datamatrix => "datamatrix",
        }
    }

    /// Whether payloads of this symbology are run through tracking number classification.
    ///
    /// Carrier labels print tracking numbers as Code 128 / GS1-128 linear codes.
    pub fn is_tracking_eligible(&self) -> bool {
        matches!(self, Self::Code128 | Self::Ean128)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbology {
    type Err = SymbologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|symbology| symbology.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SymbologyError::Unknown(name.to_string()))
    }
}
