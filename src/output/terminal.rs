//! Terminal output of subnet parameters.
//!
//! [`format_report`] is the plain text report; [`print_report`] writes the
//! same content to stdout with coloured labels.

use crate::models::SubnetParameters;
use colored::Colorize;

const NETWORK_ADDRESSES_HEADER: &str = "Network addresses:";

/// Format the parameters, plus network addresses when attached, as plain text.
pub fn format_report(params: &SubnetParameters) -> String {
    match params.network_addresses() {
        Some(addresses) => format!("{params}\n\n{NETWORK_ADDRESSES_HEADER}\n{addresses}"),
        None => params.to_string(),
    }
}

/// Print the report to stdout, highlighting labels and values.
pub fn print_report(params: &SubnetParameters) {
    log::info!("printing report for /{}", params.cidr());
    for line in format_report(params).lines() {
        println!("{}", colorize_line(line));
    }
}

fn colorize_line(line: &str) -> String {
    if line == NETWORK_ADDRESSES_HEADER {
        return line.bold().to_string();
    }
    match line.split_once(": ") {
        Some((label, value)) => format!("{}: {}", label.cyan(), value.bold()),
        None => line.to_string(),
    }
}
