//! IPv4 network with CIDR prefix.
//!
//! [`AddressSpace`] stores the address as given (host bits may be set) and
//! derives mask, network, broadcast and host range on demand.

use super::details::SubnetDetails;
use super::ipv4::{cidr_mask, dotted, netmask_to_prefix, MAX_LENGTH};
use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 network: base address plus prefix length (0-32).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressSpace {
    base: u32,
    prefix_len: u8,
}

impl AddressSpace {
    /// Create a network from a raw address and prefix length.
    ///
    /// Host bits in `base` are accepted and dropped when the network address
    /// is derived.
    pub fn new(base: u32, prefix_len: u8) -> Result<AddressSpace> {
        if prefix_len > MAX_LENGTH {
            return Err(SubnetError::InvalidPrefix(prefix_len.into()));
        }
        Ok(AddressSpace { base, prefix_len })
    }

    /// The address this network was built from, host bits included.
    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Subnet mask: top `prefix_len` bits set.
    pub fn mask(&self) -> u32 {
        // prefix_len <= 32, checked in new()
        cidr_mask(self.prefix_len)
    }

    /// Lowest address in the network (host bits zero).
    pub fn network_address(&self) -> u32 {
        self.base & self.mask()
    }

    /// Highest address in the network (host bits one).
    pub fn broadcast_address(&self) -> u32 {
        self.network_address() | !self.mask()
    }

    /// First and last usable host, or `None` for /31 and /32.
    pub fn usable_host_range(&self) -> Option<(u32, u32)> {
        let network = self.network_address();
        let broadcast = self.broadcast_address();
        if broadcast - network < 2 {
            None
        } else {
            Some((network + 1, broadcast - 1))
        }
    }

    /// Number of usable hosts, 0 when there is no usable range.
    pub fn usable_hosts(&self) -> u64 {
        self.usable_host_range()
            .map(|(first, last)| u64::from(last - first) + 1)
            .unwrap_or(0)
    }

    /// Dotted-decimal summary of this network.
    pub fn describe(&self) -> SubnetDetails {
        let usable_range = match self.usable_host_range() {
            Some((first, last)) => format!("{} - {}", dotted(first), dotted(last)),
            None => "N/A".to_string(),
        };
        SubnetDetails {
            cidr: self.to_string(),
            subnet_mask: dotted(self.mask()),
            network_address: dotted(self.network_address()),
            broadcast_address: dotted(self.broadcast_address()),
            usable_range,
            usable_hosts: self.usable_hosts(),
        }
    }
}

/// Split address text into the address and an optional embedded prefix.
///
/// The prefix may be a length (`10.0.0.0/8`), a dotted netmask
/// (`10.0.0.0/255.0.0.0`) or a dotted hostmask (`10.0.0.0/0.255.255.255`).
pub fn parse_address_text(text: &str) -> Result<(u32, Option<u8>)> {
    let text = text.trim();
    let (addr_text, prefix_text) = match text.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (text, None),
    };
    let addr: Ipv4Addr = addr_text
        .parse()
        .map_err(|_| SubnetError::InvalidAddressText(format!("{addr_text} is not an IPv4 address")))?;

    let prefix = match prefix_text {
        None => None,
        Some(p) if p.contains('.') => {
            let netmask: Ipv4Addr = p
                .parse()
                .map_err(|_| SubnetError::InvalidAddressText(format!("invalid netmask {p}")))?;
            Some(netmask_to_prefix(netmask)?)
        }
        Some(p) if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(SubnetError::InvalidAddressText(format!(
                "invalid prefix length {p}"
            )));
        }
        Some(p) => {
            let len: u8 = p
                .parse()
                .map_err(|_| SubnetError::InvalidAddressText(format!("invalid prefix length {p}")))?;
            if len > MAX_LENGTH {
                return Err(SubnetError::InvalidPrefix(len.into()));
            }
            Some(len)
        }
    };
    Ok((u32::from(addr), prefix))
}

impl FromStr for AddressSpace {
    type Err = SubnetError;

    /// Parse CIDR text such as `192.168.1.0/24`. The prefix is required.
    fn from_str(s: &str) -> Result<AddressSpace> {
        match parse_address_text(s)? {
            (addr, Some(prefix_len)) => AddressSpace::new(addr, prefix_len),
            (_, None) => Err(SubnetError::InvalidAddressText(format!(
                "{s} is missing a /prefix"
            ))),
        }
    }
}

impl std::fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}/{}",
            Ipv4Addr::from(self.network_address()),
            self.prefix_len
        )
    }
}

impl PartialOrd for AddressSpace {
    fn partial_cmp(&self, other: &AddressSpace) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AddressSpace {
    fn cmp(&self, other: &AddressSpace) -> std::cmp::Ordering {
        (self.network_address(), self.prefix_len, self.base).cmp(&(
            other.network_address(),
            other.prefix_len,
            other.base,
        ))
    }
}

impl Serialize for AddressSpace {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressSpace {
    fn deserialize<D>(deserializer: D) -> std::result::Result<AddressSpace, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
