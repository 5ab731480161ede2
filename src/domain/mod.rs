//! Domain value objects and types.
//!
//! This module contains the types exchanged with the capture layer (barcodes
//! and their symbologies) and the tracking numbers recognized in them.

pub mod barcode;
pub mod carrier;
pub mod symbology;
pub mod tracking_number;

pub use barcode::Barcode;
pub use carrier::CarrierType;
pub use symbology::Symbology;
pub use tracking_number::TrackingNumber;
