//! Output formatting for calculation results.
//!
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - plain-text output with colors

mod csv;
mod terminal;

pub use csv::render_csv;
pub use terminal::{format_field, render_multiple, render_single};

use crate::error::{Result, SubnetError};
use crate::CalcResult;

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render a result in the chosen format.
pub fn render(result: &CalcResult, format: OutputFormat) -> Result<String> {
    log::debug!("render({format:?})");
    let out = match (format, result) {
        (OutputFormat::Text, CalcResult::Single(details)) => render_single(details),
        (OutputFormat::Text, CalcResult::Multiple { subnets, .. }) => render_multiple(subnets),
        (OutputFormat::Csv, CalcResult::Single(details)) => {
            render_csv(std::slice::from_ref(details))
        }
        (OutputFormat::Csv, CalcResult::Multiple { subnets, .. }) => render_csv(subnets),
        (OutputFormat::Json, CalcResult::Single(details)) => to_json(details)?,
        (OutputFormat::Json, CalcResult::Multiple { subnets, .. }) => to_json(subnets)?,
    };
    Ok(out)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| SubnetError::Output(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressSpace;

    #[test]
    fn test_render_json_single() {
        let space: AddressSpace = "10.0.0.0/31".parse().unwrap();
        let json = render(&CalcResult::Single(space.describe()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "10.0.0.0/31");
        assert_eq!(value["usable_range"], "N/A");
        assert_eq!(value["usable_hosts"], 0);
    }

    #[test]
    fn test_render_json_multiple() {
        let subnets = vec![
            "10.0.0.0/25".parse::<AddressSpace>().unwrap().describe(),
            "10.0.0.128/25".parse::<AddressSpace>().unwrap().describe(),
        ];
        let result = CalcResult::Multiple {
            new_prefix: 25,
            subnets,
        };
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["network_address"], "10.0.0.128");
    }

    #[test]
    fn test_render_csv_single() {
        let space: AddressSpace = "10.0.0.0/30".parse().unwrap();
        let csv = render(&CalcResult::Single(space.describe()), OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"10.0.0.1 - 10.0.0.2\""));
    }
}
