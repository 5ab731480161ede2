//! Barcode value object.

use super::symbology::Symbology;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded barcode as delivered by a capture device.
///
/// Whitespace is removed from the payload at construction time; scanners
/// frequently pad or wrap the text they emit.
///
/// # Example
///
/// ```
/// use tracking_classifier::domain::{Barcode, Symbology};
///
/// let barcode = Barcode::new(Symbology::Code128, " 1Z 999 AA1 \n");
/// assert_eq!(barcode.text(), "1Z999AA1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode {
    symbology: Symbology,
    text: String,
}

impl Barcode {
    /// Create a new Barcode, stripping all whitespace from `text`.
    pub fn new(symbology: Symbology, text: impl AsRef<str>) -> Self {
        let text = text
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        Self { symbology, text }
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Get the payload as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.symbology)
    }
}
