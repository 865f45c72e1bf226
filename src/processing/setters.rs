//! Constructors deriving a full [`SubnetParameters`] from any one parameter.
//!
//! Each setter validates and normalizes its input to a prefix length, then
//! derives the remaining parameters from that prefix alone.

use super::derive::{
    check_range, cidr_from_mask, hosts_from_cidr, mask_from_cidr, subnet_count_from_cidr,
};
use crate::config::{MAX_CIDR, MAX_HOSTS, MAX_SUBNETS, MIN_CIDR, MIN_HOSTS, MIN_SUBNETS};
use crate::error::SubnetError;
use crate::models::{AddressClass, SubnetMask, SubnetParameters};

impl SubnetParameters {
    fn derived(cidr: u8) -> Result<SubnetParameters, SubnetError> {
        let params = SubnetParameters::new(
            cidr,
            mask_from_cidr(cidr)?,
            subnet_count_from_cidr(cidr)?,
            hosts_from_cidr(cidr)?,
        );
        log::trace!("derived /{cidr}: {params:?}");
        Ok(params)
    }

    /// Derive from a subnet count in `[1, 128]` relative to `class`.
    ///
    /// The count is rounded up to the next power of two, so asking for 5
    /// class C subnets gives 8 subnets at /27.
    pub fn from_subnet_count(
        count: u32,
        class: AddressClass,
    ) -> Result<SubnetParameters, SubnetError> {
        let count = check_range("subnets", count, MIN_SUBNETS, MAX_SUBNETS)?;
        let normalized = count.next_power_of_two();
        if normalized != count {
            log::debug!("rounded subnet count {count} up to {normalized}");
        }
        let cidr = class.base_prefix() + normalized.trailing_zeros() as u8;
        log::debug!("{normalized} class {class} subnets -> /{cidr}");
        SubnetParameters::derived(cidr)
    }

    /// Derive from a required number of hosts per subnet in `[1, 16777214]`.
    ///
    /// Two addresses are reserved for network and broadcast before rounding
    /// the block up to a power of two, so 100 hosts gives a /25 with 126 hosts.
    pub fn from_host_count(hosts: u32) -> Result<SubnetParameters, SubnetError> {
        let hosts = check_range("hosts", hosts, MIN_HOSTS, MAX_HOSTS)?;
        let block = (hosts + 2).next_power_of_two();
        if block - 2 != hosts {
            log::debug!("rounded host count {hosts} up to {}", block - 2);
        }
        let cidr = 32 - block.trailing_zeros() as u8;
        log::debug!("block of {block} addresses -> /{cidr}");
        SubnetParameters::derived(cidr)
    }

    /// Derive from a dotted-decimal mask string such as `"255.255.255.0"`.
    pub fn from_mask(mask: &str) -> Result<SubnetParameters, SubnetError> {
        let parsed: SubnetMask = mask.parse()?;
        SubnetParameters::from_subnet_mask(parsed)
    }

    /// Derive from an already parsed mask.
    ///
    /// Fails with [`SubnetError::MalformedMask`] when the mask is not the
    /// canonical mask of the prefix it implies, e.g. `255.0.255.0`.
    pub fn from_subnet_mask(mask: SubnetMask) -> Result<SubnetParameters, SubnetError> {
        let cidr = cidr_from_mask(&mask);
        let params = SubnetParameters::derived(cidr)?;
        if params.subnet_mask() != Some(mask) {
            log::warn!("rejected non canonical mask {mask}");
            return Err(SubnetError::malformed_mask(
                &mask.to_string(),
                "mask bits are not contiguous from 255.0.0.0",
            ));
        }
        Ok(params)
    }

    /// Derive from a prefix length in `[8, 32]`.
    pub fn from_cidr(cidr: u32) -> Result<SubnetParameters, SubnetError> {
        let cidr = check_range("cidr", cidr, MIN_CIDR, MAX_CIDR)?;
        SubnetParameters::derived(cidr as u8)
    }
}
