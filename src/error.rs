//! Error types for subnet parameter derivation.

use thiserror::Error;

/// Validation failures raised by the subnet parameter engine.
///
/// Every variant is recoverable by the caller; no partially derived
/// parameters are ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Numeric input outside its documented bound.
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    InvalidRange {
        parameter: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// Mask string is not four valid subnet mask octets.
    #[error("invalid subnet mask '{mask}': {reason}")]
    MalformedMask { mask: String, reason: String },
    /// Operation needs a derived parameter set but none has been set.
    #[error("no parameter set, use one of: subnets, hosts, mask or cidr first")]
    UnsetState,
    /// Address class selector is not A, B or C.
    #[error("unrecognized address class '{0}', expected one of: a, b, c")]
    UnrecognizedClass(String),
}

impl SubnetError {
    pub(crate) fn malformed_mask(mask: &str, reason: impl Into<String>) -> Self {
        SubnetError::MalformedMask {
            mask: mask.to_string(),
            reason: reason.into(),
        }
    }
}
