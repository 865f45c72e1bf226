//! Network address enumeration.
//!
//! Lists the base value of the significant octet for every subnet of the
//! current prefix, e.g. /26 gives `[0, 64, 128, 192]` in the 4th octet.

use super::derive::address_gap;
use crate::error::SubnetError;
use crate::models::{NetworkAddresses, SubnetParameters};

/// Enumerate network base values for a derived parameter set.
///
/// Fails with [`SubnetError::UnsetState`] if no setter has run.
pub fn enumerate_network_addresses(
    params: &SubnetParameters,
) -> Result<NetworkAddresses, SubnetError> {
    if !params.is_set() {
        log::warn!("network address enumeration requested before any parameter was set");
        return Err(SubnetError::UnsetState);
    }

    let (octet, gap) = address_gap(params.cidr())?;
    let addresses: Vec<u8> = (0u16..256)
        .step_by(gap as usize)
        .map(|addr| addr as u8)
        .collect();
    log::debug!(
        "/{} has {} network addresses in the {octet} octet",
        params.cidr(),
        addresses.len()
    );

    Ok(NetworkAddresses { octet, addresses })
}

impl SubnetParameters {
    /// Return these parameters with their network addresses attached.
    pub fn with_network_addresses(self) -> Result<SubnetParameters, SubnetError> {
        let addresses = enumerate_network_addresses(&self)?;
        Ok(self.attach_network_addresses(addresses))
    }
}
