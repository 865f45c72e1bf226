//! Subnet parameter set and enumerated network addresses.

use super::{SignificantOctet, SubnetMask};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Base values the significant octet takes across all subnets of a prefix.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddresses {
    /// Octet the addresses belong in.
    pub octet: SignificantOctet,
    /// Ordered base values, starting at 0 and all below 256.
    pub addresses: Vec<u8>,
}

impl fmt::Display for NetworkAddresses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(Place in {} octet)", self.octet)?;
        write!(f, "[{}]", self.addresses.iter().join(", "))
    }
}

/// The four mutually derivable parameters of a subnetting scheme.
///
/// A default value is the unset state: prefix 0, no mask and zero counts.
/// Derived values are only produced by the `from_*` constructors, which keep
/// prefix, mask, subnet count and hosts per subnet consistent.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SubnetParameters {
    cidr: u8,
    subnet_mask: Option<SubnetMask>,
    subnet_count: u32,
    hosts_per_subnet: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    network_addresses: Option<NetworkAddresses>,
}

impl SubnetParameters {
    pub(crate) fn new(
        cidr: u8,
        subnet_mask: SubnetMask,
        subnet_count: u32,
        hosts_per_subnet: u32,
    ) -> SubnetParameters {
        SubnetParameters {
            cidr,
            subnet_mask: Some(subnet_mask),
            subnet_count,
            hosts_per_subnet,
            network_addresses: None,
        }
    }

    pub(crate) fn attach_network_addresses(mut self, addresses: NetworkAddresses) -> Self {
        self.network_addresses = Some(addresses);
        self
    }

    /// Returns true once any setter has derived the parameters.
    pub fn is_set(&self) -> bool {
        self.cidr != 0
    }

    /// Prefix length, 0 when unset.
    pub fn cidr(&self) -> u8 {
        self.cidr
    }

    pub fn subnet_mask(&self) -> Option<SubnetMask> {
        self.subnet_mask
    }

    pub fn subnet_count(&self) -> u32 {
        self.subnet_count
    }

    /// Usable hosts, network and broadcast excluded (except /31 and /32).
    pub fn hosts_per_subnet(&self) -> u32 {
        self.hosts_per_subnet
    }

    /// Addresses attached by `with_network_addresses`, if requested.
    pub fn network_addresses(&self) -> Option<&NetworkAddresses> {
        self.network_addresses.as_ref()
    }
}

impl fmt::Display for SubnetParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mask = self
            .subnet_mask
            .map(|m| m.to_string())
            .unwrap_or_default();
        writeln!(f, "CIDR: /{}", self.cidr)?;
        writeln!(f, "Subnet Mask: {mask}")?;
        writeln!(f, "Number of Subnets: {}", self.subnet_count)?;
        write!(
            f,
            "Hosts per Subnet: {}  (Excludes network and broadcast addresses.)",
            self.hosts_per_subnet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let params = SubnetParameters::default();
        assert!(!params.is_set());
        assert_eq!(params.cidr(), 0);
        assert_eq!(params.subnet_mask(), None);
        assert_eq!(params.subnet_count(), 0);
        assert_eq!(params.hosts_per_subnet(), 0);
        assert!(params.network_addresses().is_none());
    }

    #[test]
    fn test_display_unset() {
        let params = SubnetParameters::default();
        assert_eq!(
            params.to_string(),
            "CIDR: /0\nSubnet Mask: \nNumber of Subnets: 0\nHosts per Subnet: 0  (Excludes network and broadcast addresses.)"
        );
    }

    #[test]
    fn test_network_addresses_display() {
        let addresses = NetworkAddresses {
            octet: SignificantOctet::Fourth,
            addresses: vec![0, 128],
        };
        assert_eq!(addresses.to_string(), "(Place in 4th octet)\n[0, 128]");
    }

    #[test]
    fn test_serialize_skips_missing_addresses() {
        let mask = SubnetMask::from_octets([255, 255, 255, 128]);
        let params = SubnetParameters::new(25, mask, 2, 126);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["subnet_mask"], "255.255.255.128");
        assert_eq!(json["cidr"], 25);
        assert!(json.get("network_addresses").is_none());
    }
}
