//! Address class selector and the significant octet boundary descriptor.

use crate::error::SubnetError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Legacy address class used as the base for subnet count derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
}

impl AddressClass {
    /// Natural prefix length of the class: /8, /16 or /24.
    pub const fn base_prefix(self) -> u8 {
        match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
        }
    }
}

impl FromStr for AddressClass {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(AddressClass::A),
            "b" => Ok(AddressClass::B),
            "c" => Ok(AddressClass::C),
            _ => Err(SubnetError::UnrecognizedClass(s.to_string())),
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
        };
        write!(f, "{name}")
    }
}

/// The octet of a mask in which the prefix boundary falls.
///
/// Every prefix in `[8, 32]` maps to exactly one of three ranges:
/// `[8, 16)` → 2nd octet, `[16, 24)` → 3rd octet, `[24, 32]` → 4th octet.
/// Mask, subnet count and network address arithmetic all go through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignificantOctet {
    Second,
    Third,
    Fourth,
}

impl SignificantOctet {
    /// Returns the octet holding the boundary for `cidr`, `None` outside `[8, 32]`.
    pub const fn for_cidr(cidr: u8) -> Option<SignificantOctet> {
        match cidr {
            24..=32 => Some(SignificantOctet::Fourth),
            16..=23 => Some(SignificantOctet::Third),
            8..=15 => Some(SignificantOctet::Second),
            _ => None,
        }
    }

    /// One based position of the octet within the address.
    pub const fn position(self) -> u8 {
        match self {
            SignificantOctet::Second => 2,
            SignificantOctet::Third => 3,
            SignificantOctet::Fourth => 4,
        }
    }

    pub const fn index(self) -> usize {
        self.position() as usize - 1
    }

    /// Prefix length at which this octet is fully network bits: 16, 24 or 32.
    pub const fn boundary(self) -> u8 {
        self.position() * 8
    }

    /// Bits of this octet left for hosts at prefix `cidr`, always in `0..=8`.
    pub const fn host_bits(self, cidr: u8) -> u32 {
        (self.boundary() - cidr) as u32
    }
}

impl fmt::Display for SignificantOctet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordinal = match self {
            SignificantOctet::Second => "2nd",
            SignificantOctet::Third => "3rd",
            SignificantOctet::Fourth => "4th",
        };
        write!(f, "{ordinal}")
    }
}

impl Serialize for SignificantOctet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.position())
    }
}
