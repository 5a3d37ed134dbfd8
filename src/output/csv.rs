//! CSV output formatting for subnet details.

use crate::models::SubnetDetails;
use itertools::Itertools;

use super::terminal::format_field;

const HEADER: [&str; 7] = [
    "cnt",
    "subnet",
    "subnet_mask",
    "network",
    "broadcast",
    "usable_range",
    "usable_hosts",
];

/// Render subnets as CSV: a header row then one row per subnet.
///
/// Fields are quoted and right-aligned so the columns line up in a terminal.
pub fn render_csv(subnets: &[SubnetDetails]) -> String {
    let mut out = HEADER.iter().map(|h| format!("\"{h}\"")).join(",");
    out.push('\n');
    for (i, details) in subnets.iter().enumerate() {
        out.push_str(&csv_row(i + 1, details));
        out.push('\n');
    }
    out
}

/// Format a single CSV row.
fn csv_row(cnt: usize, details: &SubnetDetails) -> String {
    [
        format_field(cnt, 5),
        format_field(&details.cidr, 20),
        format_field(&details.subnet_mask, 17),
        format_field(&details.network_address, 17),
        format_field(&details.broadcast_address, 17),
        format_field(&details.usable_range, 33),
        format_field(details.usable_hosts, 12),
    ]
    .iter()
    .join(",")
}
