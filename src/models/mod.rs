//! Domain models for subnet calculations.
//!
//! - [`AddressSpace`] - IPv4 network with CIDR prefix
//! - [`SubnetDetails`] - dotted-decimal summary of a network

mod address_space;
mod details;
mod ipv4;

// Re-export public types
pub use address_space::{parse_address_text, AddressSpace};
pub use details::SubnetDetails;
pub use ipv4::{
    block_size, broadcast_addr, cidr_mask, cut_addr, dotted, get_cidr_mask, netmask_to_prefix,
    MAX_LENGTH,
};
