//! JSON output of subnet parameters.

use crate::models::SubnetParameters;
use std::error::Error;

/// Serialize the parameters as pretty printed JSON.
pub fn format_json(params: &SubnetParameters) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(params).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}
