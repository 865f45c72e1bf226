//! Pure derivation functions shared by every setter.
//!
//! Everything here is a function of the prefix length alone, except
//! [`cidr_from_mask`] which goes the other way.

use crate::config::{MAX_CIDR, MIN_CIDR};
use crate::error::SubnetError;
use crate::models::{SignificantOctet, SubnetMask};

/// Fail with [`SubnetError::InvalidRange`] unless `min <= value <= max`.
pub(crate) fn check_range(
    parameter: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<u32, SubnetError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        log::warn!("rejected {parameter}={value}, allowed range is [{min}, {max}]");
        Err(SubnetError::InvalidRange {
            parameter,
            value,
            min,
            max,
        })
    }
}

/// Look up the octet boundary for `cidr`, rejecting prefixes outside `[8, 32]`.
pub fn significant_octet(cidr: u8) -> Result<SignificantOctet, SubnetError> {
    SignificantOctet::for_cidr(cidr).ok_or(SubnetError::InvalidRange {
        parameter: "cidr",
        value: cidr as u32,
        min: MIN_CIDR,
        max: MAX_CIDR,
    })
}

/// Usable hosts per subnet: `2^(32 - cidr) - 2`, or 1 for /31 and /32.
pub fn hosts_from_cidr(cidr: u8) -> Result<u32, SubnetError> {
    significant_octet(cidr)?;
    let hosts = match cidr {
        31 | 32 => 1,
        _ => (1u32 << (32 - cidr)) - 2,
    };
    Ok(hosts)
}

/// Dotted mask for `cidr`. Octets before the significant one are 255, octets after it 0.
pub fn mask_from_cidr(cidr: u8) -> Result<SubnetMask, SubnetError> {
    let octet = significant_octet(cidr)?;
    let mut octets = [255u8; 4];
    for value in octets.iter_mut().skip(octet.index() + 1) {
        *value = 0;
    }
    octets[octet.index()] = (256 - (1u16 << octet.host_bits(cidr))) as u8;
    Ok(SubnetMask::from_octets(octets))
}

/// Number of values the significant octet takes: `2^(8 - host bits of that octet)`.
pub fn subnet_count_from_cidr(cidr: u8) -> Result<u32, SubnetError> {
    let octet = significant_octet(cidr)?;
    Ok(1u32 << (8 - octet.host_bits(cidr)))
}

/// Step between consecutive network base values in the significant octet.
pub fn address_gap(cidr: u8) -> Result<(SignificantOctet, u16), SubnetError> {
    let octet = significant_octet(cidr)?;
    Ok((octet, 1u16 << octet.host_bits(cidr)))
}

/// Derive the prefix length from a parsed mask.
///
/// The significant value is the first octet strictly between 0 and 255; with
/// none, it is 255 when the last octet is 255 (host route) and 0 otherwise.
/// The octet position is the first of octets 2 and 3 below 255, else the 4th.
/// Contiguity is not checked here.
pub fn cidr_from_mask(mask: &SubnetMask) -> u8 {
    let octets = mask.octets();
    let significant = octets
        .iter()
        .copied()
        .find(|o| *o > 0 && *o < 255)
        .unwrap_or(if octets[3] == 255 { 255 } else { 0 });

    let boundary = if octets[1] < 255 {
        SignificantOctet::Second.boundary()
    } else if octets[2] < 255 {
        SignificantOctet::Third.boundary()
    } else {
        SignificantOctet::Fourth.boundary()
    };

    // 256 - significant is a power of two for every valid mask octet
    let host_bits = (256 - significant as u16).trailing_zeros() as u8;
    boundary - host_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(s: &str) -> SubnetMask {
        s.parse().unwrap()
    }

    #[test]
    fn test_hosts_from_cidr() {
        assert_eq!(hosts_from_cidr(8).unwrap(), 16_777_214);
        assert_eq!(hosts_from_cidr(16).unwrap(), 65_534);
        assert_eq!(hosts_from_cidr(24).unwrap(), 254);
        assert_eq!(hosts_from_cidr(25).unwrap(), 126);
        assert_eq!(hosts_from_cidr(30).unwrap(), 2);
        assert_eq!(hosts_from_cidr(31).unwrap(), 1);
        assert_eq!(hosts_from_cidr(32).unwrap(), 1);
        assert!(hosts_from_cidr(7).is_err());
        assert!(hosts_from_cidr(33).is_err());
    }

    #[test]
    fn test_mask_from_cidr() {
        assert_eq!(mask_from_cidr(8).unwrap().to_string(), "255.0.0.0");
        assert_eq!(mask_from_cidr(12).unwrap().to_string(), "255.240.0.0");
        assert_eq!(mask_from_cidr(16).unwrap().to_string(), "255.255.0.0");
        assert_eq!(mask_from_cidr(19).unwrap().to_string(), "255.255.224.0");
        assert_eq!(mask_from_cidr(24).unwrap().to_string(), "255.255.255.0");
        assert_eq!(mask_from_cidr(25).unwrap().to_string(), "255.255.255.128");
        assert_eq!(mask_from_cidr(31).unwrap().to_string(), "255.255.255.254");
        assert_eq!(mask_from_cidr(32).unwrap().to_string(), "255.255.255.255");
        assert!(mask_from_cidr(0).is_err());
    }

    #[test]
    fn test_subnet_count_from_cidr() {
        assert_eq!(subnet_count_from_cidr(8).unwrap(), 1);
        assert_eq!(subnet_count_from_cidr(15).unwrap(), 128);
        assert_eq!(subnet_count_from_cidr(16).unwrap(), 1);
        assert_eq!(subnet_count_from_cidr(20).unwrap(), 16);
        assert_eq!(subnet_count_from_cidr(24).unwrap(), 1);
        assert_eq!(subnet_count_from_cidr(25).unwrap(), 2);
        assert_eq!(subnet_count_from_cidr(32).unwrap(), 256);
    }

    #[test]
    fn test_address_gap() {
        assert_eq!(address_gap(26).unwrap(), (SignificantOctet::Fourth, 64));
        assert_eq!(address_gap(24).unwrap(), (SignificantOctet::Fourth, 256));
        assert_eq!(address_gap(20).unwrap(), (SignificantOctet::Third, 16));
        assert_eq!(address_gap(9).unwrap(), (SignificantOctet::Second, 128));
        assert_eq!(address_gap(32).unwrap(), (SignificantOctet::Fourth, 1));
    }

    #[test]
    fn test_cidr_from_mask() {
        assert_eq!(cidr_from_mask(&mask("255.0.0.0")), 8);
        assert_eq!(cidr_from_mask(&mask("255.254.0.0")), 15);
        assert_eq!(cidr_from_mask(&mask("255.255.0.0")), 16);
        assert_eq!(cidr_from_mask(&mask("255.255.252.0")), 22);
        assert_eq!(cidr_from_mask(&mask("255.255.255.0")), 24);
        assert_eq!(cidr_from_mask(&mask("255.255.255.192")), 26);
        assert_eq!(cidr_from_mask(&mask("255.255.255.255")), 32);
    }

    #[test]
    fn test_cidr_mask_round_trip() {
        for cidr in 8..=32u8 {
            let mask = mask_from_cidr(cidr).unwrap();
            assert_eq!(cidr_from_mask(&mask), cidr, "round trip failed for /{cidr}");
        }
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range("cidr", 8, 8, 32).unwrap(), 8);
        assert_eq!(check_range("cidr", 32, 8, 32).unwrap(), 32);
        assert_eq!(
            check_range("cidr", 33, 8, 32).unwrap_err(),
            SubnetError::InvalidRange {
                parameter: "cidr",
                value: 33,
                min: 8,
                max: 32
            }
        );
    }
}
