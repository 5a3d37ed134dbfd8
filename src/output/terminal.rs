//! Terminal output utilities.
//!
//! Provides the plain-text layout and formatting helpers shared with CSV.

use crate::models::SubnetDetails;
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// `Key: value` lines for a single network.
pub fn render_single(details: &SubnetDetails) -> String {
    let mut out = String::new();
    for (key, value) in details.fields() {
        let _ = writeln!(out, "{key}: {value}");
    }
    out
}

/// One `Subnet i:` block per network, numbered from 1, each followed by a
/// blank line.
pub fn render_multiple(subnets: &[SubnetDetails]) -> String {
    let mut out = String::new();
    for (i, details) in subnets.iter().enumerate() {
        let heading = format!("Subnet {}:", i + 1);
        let _ = writeln!(out, "{}", heading.bold());
        let _ = writeln!(out, "  Subnet: {}", details.cidr.cyan());
        for (key, value) in details.fields() {
            let _ = writeln!(out, "  {key}: {value}");
        }
        out.push('\n');
    }
    out
}
