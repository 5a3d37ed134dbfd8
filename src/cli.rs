//! Command line definition.

use crate::output::OutputFormat;
use clap::Parser;

/// Subnet Calculator
///
/// Shows mask, network, broadcast and usable host range for an IPv4 network,
/// optionally split into a number of equal subnets.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// IP address in dotted decimal notation, optionally with /prefix or /netmask
    pub ip_address: String,

    /// CIDR prefix length (optional if the address carries one)
    #[arg(long, allow_negative_numbers = true)]
    pub cidr: Option<i64>,

    /// Number of desired subnets (optional)
    #[arg(long, allow_negative_numbers = true)]
    pub subnets: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level filter for the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
