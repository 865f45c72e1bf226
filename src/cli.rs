//! Command line parsing for the `subnet-calc` binary.

use crate::config::OutputFormat;
use crate::error::SubnetError;
use crate::models::{AddressClass, SubnetParameters};

/// The single parameter a user sets; the rest are derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Subnets { count: u32, class: String },
    Hosts(u32),
    Mask(String),
    Cidr(u32),
}

impl Request {
    /// Run the matching setter.
    pub fn resolve(&self) -> Result<SubnetParameters, SubnetError> {
        match self {
            Request::Subnets { count, class } => {
                let class: AddressClass = class.parse()?;
                SubnetParameters::from_subnet_count(*count, class)
            }
            Request::Hosts(hosts) => SubnetParameters::from_host_count(*hosts),
            Request::Mask(mask) => SubnetParameters::from_mask(mask),
            Request::Cidr(cidr) => SubnetParameters::from_cidr(*cidr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Calculate {
        request: Request,
        /// Also enumerate network addresses.
        netaddr: bool,
        /// Overrides the configured output format.
        output: Option<OutputFormat>,
    },
    Help,
    Version,
}

pub fn version_text() -> String {
    format!("subnet-calc {}", env!("CARGO_PKG_VERSION"))
}

pub fn usage_text() -> String {
    format!(
        "{version}
IPv4 subnet calculator: set one parameter, derive the other three.

Usage:
  subnet-calc subnets <COUNT> <CLASS>  [options]   COUNT 1-128, CLASS a|b|c
  subnet-calc hosts <COUNT>            [options]   COUNT 1-16777214
  subnet-calc mask <MASK>              [options]   e.g. 255.255.255.0
  subnet-calc cidr <PREFIX>            [options]   PREFIX 8-32

Options:
  -n, --netaddr   Also list network addresses
      --json      Print JSON instead of the text report
      --text      Print the text report
  -h, --help      Show this help text
  -V, --version   Show version",
        version = version_text()
    )
}

fn parse_u32_arg(name: &str, raw: &str) -> Result<u32, String> {
    raw.trim().parse::<u32>().map_err(|_| {
        format!(
            "Invalid value for {name}: '{raw}'. Expected a non-negative integer.\n\n{}",
            usage_text()
        )
    })
}

fn expect_values(command: &str, values: &[String], count: usize) -> Result<(), String> {
    if values.len() == count {
        Ok(())
    } else {
        Err(format!(
            "{command} expects {count} value(s), got {}.\n\n{}",
            values.len(),
            usage_text()
        ))
    }
}

/// Parse process arguments, the first item being the program name.
pub fn parse_cli_args<I, S>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = args.into_iter();
    let _program_name = iter.next();

    let mut command: Option<String> = None;
    let mut values: Vec<String> = Vec::new();
    let mut netaddr = false;
    let mut output: Option<OutputFormat> = None;

    for arg in iter {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "-n" | "--netaddr" => netaddr = true,
            "--json" => output = Some(OutputFormat::Json),
            "--text" => output = Some(OutputFormat::Text),
            _ if arg.starts_with("--") => {
                return Err(format!("Unknown argument: {arg}\n\n{}", usage_text()));
            }
            _ if command.is_none() => command = Some(arg.to_lowercase()),
            _ => values.push(arg.to_string()),
        }
    }

    let command = command.ok_or_else(|| format!("Missing command.\n\n{}", usage_text()))?;
    let request = match command.as_str() {
        "subnets" => {
            expect_values("subnets", &values, 2)?;
            Request::Subnets {
                count: parse_u32_arg("subnets", &values[0])?,
                class: values[1].clone(),
            }
        }
        "hosts" => {
            expect_values("hosts", &values, 1)?;
            Request::Hosts(parse_u32_arg("hosts", &values[0])?)
        }
        "mask" => {
            expect_values("mask", &values, 1)?;
            Request::Mask(values[0].clone())
        }
        "cidr" => {
            expect_values("cidr", &values, 1)?;
            let raw = values[0].trim_start_matches('/');
            Request::Cidr(parse_u32_arg("cidr", raw)?)
        }
        other => return Err(format!("Unknown command: {other}\n\n{}", usage_text())),
    };

    Ok(CliCommand::Calculate {
        request,
        netaddr,
        output,
    })
}

/// Resolve the request and attach network addresses when asked for.
pub fn calculate(request: &Request, netaddr: bool) -> Result<SubnetParameters, SubnetError> {
    let params = request.resolve()?;
    if netaddr {
        params.with_network_addresses()
    } else {
        Ok(params)
    }
}
