//! Printable summary of one network.

use serde::{Deserialize, Serialize};

/// Dotted-decimal details for a single network, as returned by
/// [`AddressSpace::describe`](super::AddressSpace::describe).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDetails {
    /// Network in CIDR notation, e.g. `192.168.1.64/26`.
    pub cidr: String,
    pub subnet_mask: String,
    pub network_address: String,
    pub broadcast_address: String,
    /// `"first - last"`, or `"N/A"` for /31 and /32.
    pub usable_range: String,
    pub usable_hosts: u64,
}

impl SubnetDetails {
    /// Labelled fields for text output, in display order. `cidr` is left
    /// out since callers listing several subnets print it separately, and
    /// `usable_hosts` only appears in CSV and JSON.
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            ("Subnet Mask", self.subnet_mask.clone()),
            ("Network Address", self.network_address.clone()),
            ("Broadcast Address", self.broadcast_address.clone()),
            ("Usable IP Range", self.usable_range.clone()),
        ]
    }
}
