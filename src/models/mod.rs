//! Domain models for subnet parameter derivation.
//!
//! This module contains the core data structures:
//! - [`SubnetMask`] - validated dotted-decimal subnet mask
//! - [`AddressClass`] and [`SignificantOctet`] - class selector and octet boundary
//! - [`SubnetParameters`] and [`NetworkAddresses`] - derived parameter set

mod ipv4;
mod octet;
mod subnet;

// Re-export public types
pub use ipv4::{is_mask_octet, SubnetMask};
pub use octet::{AddressClass, SignificantOctet};
pub use subnet::{NetworkAddresses, SubnetParameters};
