//! CarrierType enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The shipping carrier (or carrier sub-service) a tracking number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CarrierType {
    /// UPS `1Z` tracking numbers
    Ups,

    /// UPS SurePost (USPS last-mile)
    UpsSurePost,

    /// United States Postal Service
    Usps,

    /// FedEx 12- and 20-digit tracking numbers
    Fedex,

    /// FedEx SmartPost (USPS last-mile)
    FedexSmartPost,
}

impl CarrierType {
    /// Every carrier, in declaration order.
    pub const ALL: [CarrierType; 5] = [
        CarrierType::Ups,
        CarrierType::UpsSurePost,
        CarrierType::Usps,
        CarrierType::Fedex,
        CarrierType::FedexSmartPost,
    ];

    /// The wire name of this carrier (matches its serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ups => "ups",
            Self::UpsSurePost => "upsSurePost",
            Self::Usps => "usps",
            Self::Fedex => "fedex",
            Self::FedexSmartPost => "fedexSmartPost",
        }
    }
}

impl fmt::Display for CarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarrierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|carrier| carrier.as_str() == s)
            .ok_or_else(|| format!("Unknown carrier: {}", s))
    }
}
