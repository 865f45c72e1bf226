//! Subnet parameter derivation logic.
//!
//! This module contains the business logic:
//! - [`derive`] - pure functions from prefix length to mask, counts and gaps
//! - [`setters`] - `SubnetParameters::from_*` constructors
//! - [`netaddr`] - network address enumeration

pub mod derive;
mod netaddr;
mod setters;

// Re-export public functions
pub use derive::{
    address_gap, cidr_from_mask, hosts_from_cidr, mask_from_cidr, significant_octet,
    subnet_count_from_cidr,
};
pub use netaddr::enumerate_network_addresses;
