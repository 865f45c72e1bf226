//! IPv4 subnet mask in dotted-decimal notation.
//!
//! Provides [`SubnetMask`], a validated four-octet mask whose octets are all
//! valid contiguous-mask values.

use crate::config::VALID_MASK_OCTETS;
use crate::error::SubnetError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for four dot separated decimal components.
static MASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_mask_regex() -> &'static Regex {
    MASK_REGEX.get_or_init(|| {
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)\.(\d+)$").expect("Invalid Regex")
    })
}

/// Returns true if `octet` can appear in a subnet mask.
pub fn is_mask_octet(octet: u8) -> bool {
    VALID_MASK_OCTETS.contains(&octet)
}

/// Subnet mask such as `255.255.255.128`.
///
/// Construction through [`FromStr`] guarantees every octet is one of the nine
/// valid mask values. Contiguity across octets is checked by the mask setter.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct SubnetMask {
    octets: [u8; 4],
}

impl SubnetMask {
    pub(crate) const fn from_octets(octets: [u8; 4]) -> SubnetMask {
        SubnetMask { octets }
    }

    /// Returns the four octets, most significant first.
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = get_mask_regex().captures(trimmed).ok_or_else(|| {
            SubnetError::malformed_mask(s, "expected 4 dot separated integer octets")
        })?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let raw = &caps[i + 1];
            let value: u8 = raw
                .parse()
                .map_err(|_| SubnetError::malformed_mask(s, format!("octet {raw} out of range")))?;
            if !is_mask_octet(value) {
                return Err(SubnetError::malformed_mask(
                    s,
                    format!("octet {value} is not a mask value"),
                ));
            }
            *octet = value;
        }
        log::trace!("parsed mask {trimmed} into {octets:?}");
        Ok(SubnetMask { octets })
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SubnetMask {
    fn deserialize<D>(deserializer: D) -> Result<SubnetMask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SubnetMask::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mask() {
        let mask: SubnetMask = "255.255.255.128".parse().unwrap();
        assert_eq!(mask.octets(), [255, 255, 255, 128]);
        assert_eq!(mask.to_string(), "255.255.255.128");
    }

    #[test]
    fn test_parse_mask_trims_whitespace() {
        let mask: SubnetMask = "  255.255.0.0\n".parse().unwrap();
        assert_eq!(mask.octets(), [255, 255, 0, 0]);
    }

    #[test]
    fn test_parse_mask_invalid_octet() {
        let err = "255.255.255.7".parse::<SubnetMask>().unwrap_err();
        assert!(matches!(err, SubnetError::MalformedMask { .. }));
        assert!(err.to_string().contains("octet 7"));
    }

    #[test]
    fn test_parse_mask_wrong_shape() {
        for input in ["255.255.255", "255.255.255.0.0", "", "255.255.x.0", "255..255.0"] {
            let err = input.parse::<SubnetMask>().unwrap_err();
            assert!(
                matches!(err, SubnetError::MalformedMask { .. }),
                "{input} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_mask_overflow() {
        let err = "255.255.256.0".parse::<SubnetMask>().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_mask_serde() {
        let mask: SubnetMask = "255.255.240.0".parse().unwrap();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "\"255.255.240.0\"");
        let back: SubnetMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
        assert!(serde_json::from_str::<SubnetMask>("\"255.3.0.0\"").is_err());
    }
}
