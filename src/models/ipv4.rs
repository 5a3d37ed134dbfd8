//! IPv4 mask and address bit helpers.
//!
//! All arithmetic works on the `u32` form of an address; [`Ipv4Addr`] is only
//! used to get the dotted-decimal text.

use crate::error::{Result, SubnetError};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(len.into()))
    } else {
        Ok(cidr_mask(len))
    }
}

/// Subnet mask for a prefix length already known to be at most 32.
///
/// Lengths above 32 saturate to the all-ones mask.
pub fn cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> Result<u32> {
    Ok(addr & get_cidr_mask(len)?)
}

/// Calculate the broadcast address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> Result<u32> {
    let mask = get_cidr_mask(len)?;
    Ok((addr & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(len.into()))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Convert a dotted mask back to its prefix length.
///
/// Accepts a netmask (`255.255.240.0`) or a hostmask (`0.0.15.255`). A mask
/// that reads as both (`0.0.0.0`, `255.255.255.255`) is taken as a netmask.
pub fn netmask_to_prefix(netmask: Ipv4Addr) -> Result<u8> {
    let bits = u32::from(netmask);
    let len = bits.leading_ones() as u8;
    if cidr_mask(len) == bits {
        return Ok(len);
    }
    let host_len = (!bits).leading_ones() as u8;
    if cidr_mask(host_len) == !bits {
        return Ok(host_len);
    }
    Err(SubnetError::InvalidAddressText(format!(
        "{netmask} is not a contiguous netmask or hostmask"
    )))
}

/// Dotted-decimal text for a raw address.
pub fn dotted(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}
