//! IPv4 subnet calculator.
//!
//! Derives mask, network, broadcast and usable host range for a network and
//! splits it into equal-sized subnets.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};

use cli::Cli;
use config::Config;
use models::{AddressSpace, SubnetDetails};
use processing::{CalcRequest, Partitioner};

/// Outcome of a calculation: one network, or the subnets it was split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcResult {
    Single(SubnetDetails),
    Multiple {
        new_prefix: u8,
        subnets: Vec<SubnetDetails>,
    },
}

/// Details of a single network.
pub fn describe_network(space: AddressSpace) -> SubnetDetails {
    space.describe()
}

/// Details of each subnet after splitting `space` into at least `count`
/// equal parts.
pub fn describe_subnets(
    space: AddressSpace,
    count: u64,
    partitioner: &Partitioner,
) -> Result<Vec<SubnetDetails>> {
    let subnets = partitioner.partition(space, count)?;
    Ok(subnets.iter().map(AddressSpace::describe).collect())
}

/// Run a validated request.
pub fn calculate(request: &CalcRequest, partitioner: &Partitioner) -> Result<CalcResult> {
    log::info!("#Start calculate() {}", request.space);
    match request.subnets {
        None => Ok(CalcResult::Single(describe_network(request.space))),
        Some(count) => {
            let new_prefix = partitioner.minimal_prefix_for(request.space.prefix_len(), count)?;
            log::info!(
                "# {count} subnets requested, splitting {} into /{new_prefix}",
                request.space
            );
            let subnets = partitioner
                .split(request.space, new_prefix)?
                .iter()
                .map(AddressSpace::describe)
                .collect();
            Ok(CalcResult::Multiple {
                new_prefix,
                subnets,
            })
        }
    }
}

/// Validate command line input, calculate and render the output text.
///
/// Printing and the process exit code are left to the caller.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    log::info!("#Start run() {config:?}");
    let request = CalcRequest::parse_with_default(
        &cli.ip_address,
        cli.cidr,
        cli.subnets,
        config.default_prefix,
    )?;
    let partitioner = Partitioner::new(config.max_subnets);
    let result = calculate(&request, &partitioner)?;
    output::render(&result, cli.format)
}
