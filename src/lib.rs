//! IPv4 subnet calculator.
//!
//! Derives the four parameters of a subnetting scheme (prefix length, subnet
//! mask, subnet count and hosts per subnet) from any one of them, and lists
//! the network base addresses of the resulting subnets.
//!
//! ```
//! use subnet_calc::{AddressClass, SubnetParameters};
//!
//! let params = SubnetParameters::from_subnet_count(5, AddressClass::C).unwrap();
//! assert_eq!(params.cidr(), 27);
//! assert_eq!(params.subnet_mask().unwrap().to_string(), "255.255.255.224");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{AddressClass, NetworkAddresses, SignificantOctet, SubnetMask, SubnetParameters};
pub use output::{format_json, format_report};
pub use processing::enumerate_network_addresses;
