//! Splitting a network into equal-sized subnets.

use crate::error::{Result, SubnetError};
use crate::models::{block_size, AddressSpace, MAX_LENGTH};

/// Default cap on how many subnets a single split may produce.
pub const DEFAULT_MAX_SUBNETS: u64 = 1 << 16;

/// Splits networks into equal subnets.
///
/// Holds no state besides the enumeration limit, so one value can be reused
/// for any number of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    /// Largest number of subnets [`Partitioner::split`] will materialize.
    pub max_subnets: u64,
}

impl Default for Partitioner {
    fn default() -> Self {
        Partitioner {
            max_subnets: DEFAULT_MAX_SUBNETS,
        }
    }
}

impl Partitioner {
    pub fn new(max_subnets: u64) -> Partitioner {
        Partitioner { max_subnets }
    }

    /// Smallest prefix `p >= current` with `2^(p - current) >= desired`.
    pub fn minimal_prefix_for(&self, current: u8, desired: u64) -> Result<u8> {
        minimal_prefix_for(current, desired)
    }

    /// Cut `space` into every subnet of length `new_prefix`, lowest first.
    pub fn split(&self, space: AddressSpace, new_prefix: u8) -> Result<Vec<AddressSpace>> {
        if new_prefix > MAX_LENGTH {
            return Err(SubnetError::InvalidPrefix(new_prefix.into()));
        }
        if new_prefix < space.prefix_len() {
            return Err(SubnetError::InvalidSplit {
                from: space.prefix_len(),
                to: new_prefix,
            });
        }

        let count = 1u64 << (new_prefix - space.prefix_len());
        if count > self.max_subnets {
            log::warn!(
                "split of {space} into /{new_prefix} needs {count} subnets, limit is {}",
                self.max_subnets
            );
            return Err(SubnetError::SplitTooLarge {
                count,
                limit: self.max_subnets,
            });
        }

        let step = block_size(new_prefix)?;
        let start = u64::from(space.network_address());
        log::debug!("split {space} into {count} x /{new_prefix} (block {step})");

        let mut subnets = Vec::with_capacity(count as usize);
        for i in 0..count {
            // start + i * step stays within the parent's range, so it fits in u32
            let addr = (start + i * step) as u32;
            let subnet = AddressSpace::new(addr, new_prefix)?;
            log::trace!("  subnet {i}: {subnet}");
            subnets.push(subnet);
        }
        Ok(subnets)
    }

    /// Split `space` into at least `desired` equal subnets, using the
    /// smallest power of two that fits.
    pub fn partition(&self, space: AddressSpace, desired: u64) -> Result<Vec<AddressSpace>> {
        let new_prefix = self.minimal_prefix_for(space.prefix_len(), desired)?;
        self.split(space, new_prefix)
    }
}

/// Smallest prefix `p >= current` with `2^(p - current) >= desired`.
///
/// `desired == 1` returns `current` unchanged.
pub fn minimal_prefix_for(current: u8, desired: u64) -> Result<u8> {
    if current > MAX_LENGTH {
        return Err(SubnetError::InvalidPrefix(current.into()));
    }
    if desired == 0 {
        return Err(SubnetError::InvalidSubnetCount(0));
    }
    let max = block_size(current)?;
    if desired > max {
        return Err(SubnetError::SubnetCountExceedsCapacity {
            requested: desired,
            max,
            prefix: current,
        });
    }

    let mut new_prefix = current;
    while (1u64 << (new_prefix - current)) < desired {
        new_prefix += 1;
    }
    log::debug!("minimal_prefix_for(/{current}, {desired}) = /{new_prefix}");
    Ok(new_prefix)
}
