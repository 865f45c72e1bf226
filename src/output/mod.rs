//! Output formatting for subnet parameters.
//!
//! This module handles presenting derived parameters:
//! - [`terminal`] - text report, optionally coloured
//! - [`json`] - JSON serialization

mod json;
mod terminal;

pub use json::format_json;
pub use terminal::{format_report, print_report};
