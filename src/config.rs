//! Bounds, constants and runtime configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Smallest prefix length the engine models (class A boundary).
pub const MIN_CIDR: u32 = 8;
/// Largest prefix length (host route).
pub const MAX_CIDR: u32 = 32;

/// Bounds for the subnet count setter.
pub const MIN_SUBNETS: u32 = 1;
pub const MAX_SUBNETS: u32 = 128;

/// Bounds for the host count setter. 16777214 is a full /8 minus network and broadcast.
pub const MIN_HOSTS: u32 = 1;
pub const MAX_HOSTS: u32 = 16_777_214;

/// The only values an octet of a contiguous subnet mask can take.
pub const VALID_MASK_OCTETS: [u8; 9] = [255, 254, 252, 248, 240, 224, 192, 128, 0];

/// Environment variable naming the log4rs config file.
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
/// Environment variable selecting the default output format.
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}', expected text or json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Runtime settings for the command line binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Config, String> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            if !path.trim().is_empty() {
                config.log_config = path.trim().to_string();
            }
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        Ok(config)
    }
}
