//! Turning raw user input into a validated calculation request.

use crate::error::{Result, SubnetError};
use crate::models::{block_size, parse_address_text, AddressSpace, MAX_LENGTH};

/// Prefix used when neither the address text nor `--cidr` gives one.
/// A bare address is treated as a single host route.
pub const DEFAULT_PREFIX: u8 = MAX_LENGTH;

/// A validated request: the network to describe and, optionally, how many
/// subnets to split it into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcRequest {
    pub space: AddressSpace,
    pub subnets: Option<u64>,
}

impl CalcRequest {
    /// Validate user input, falling back to [`DEFAULT_PREFIX`].
    pub fn parse(address: &str, cidr: Option<i64>, subnets: Option<i64>) -> Result<CalcRequest> {
        CalcRequest::parse_with_default(address, cidr, subnets, DEFAULT_PREFIX)
    }

    /// Validate user input.
    ///
    /// * `address` - dotted-decimal address, optionally with `/len` or `/netmask`
    /// * `cidr` - explicit prefix length; must agree with any embedded prefix
    /// * `subnets` - desired subnet count, at least 1
    /// * `default_prefix` - used when no prefix is given at all
    pub fn parse_with_default(
        address: &str,
        cidr: Option<i64>,
        subnets: Option<i64>,
        default_prefix: u8,
    ) -> Result<CalcRequest> {
        log::debug!("parse({address:?}, cidr={cidr:?}, subnets={subnets:?})");
        let (addr, embedded) = parse_address_text(address)?;

        let explicit = cidr.map(prefix_from_int).transpose()?;
        let prefix_len = match (embedded, explicit) {
            (Some(embedded), Some(explicit)) if embedded != explicit => {
                return Err(SubnetError::ConflictingPrefix { embedded, explicit });
            }
            (Some(p), _) | (None, Some(p)) => p,
            (None, None) => {
                log::info!("No prefix given for {address}, using /{default_prefix}");
                default_prefix
            }
        };
        let space = AddressSpace::new(addr, prefix_len)?;

        let subnets = match subnets {
            None => None,
            Some(n) if n < 1 => {
                log::warn!("Rejecting subnet count {n}");
                return Err(SubnetError::InvalidSubnetCount(n));
            }
            Some(n) => {
                let requested = n as u64;
                let max = block_size(prefix_len)?;
                if requested > max {
                    return Err(SubnetError::SubnetCountExceedsCapacity {
                        requested,
                        max,
                        prefix: prefix_len,
                    });
                }
                Some(requested)
            }
        };

        Ok(CalcRequest { space, subnets })
    }
}

/// Check a prefix length given as a plain integer.
pub fn prefix_from_int(value: i64) -> Result<u8> {
    match u8::try_from(value) {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(SubnetError::InvalidPrefix(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_cidr() {
        let req = CalcRequest::parse("192.168.1.0", Some(24), None).unwrap();
        assert_eq!(req.space, "192.168.1.0/24".parse().unwrap());
        assert_eq!(req.subnets, None);
    }

    #[test]
    fn test_parse_embedded_prefix() {
        let req = CalcRequest::parse("10.0.0.0/8", None, Some(4)).unwrap();
        assert_eq!(req.space.prefix_len(), 8);
        assert_eq!(req.subnets, Some(4));

        let req = CalcRequest::parse("10.0.0.0/255.255.0.0", None, None).unwrap();
        assert_eq!(req.space.prefix_len(), 16);
    }

    #[test]
    fn test_parse_matching_prefixes_accepted() {
        let req = CalcRequest::parse("10.0.0.0/24", Some(24), None).unwrap();
        assert_eq!(req.space.prefix_len(), 24);
    }

    #[test]
    fn test_parse_conflicting_prefixes() {
        assert_eq!(
            CalcRequest::parse("10.0.0.0/24", Some(26), None).unwrap_err(),
            SubnetError::ConflictingPrefix {
                embedded: 24,
                explicit: 26
            }
        );
    }

    #[test]
    fn test_parse_defaults_to_host_route() {
        let req = CalcRequest::parse("10.9.8.7", None, None).unwrap();
        assert_eq!(req.space.prefix_len(), 32);
        assert_eq!(req.space.describe().usable_range, "N/A");

        let req = CalcRequest::parse_with_default("10.9.8.7", None, None, 24).unwrap();
        assert_eq!(req.space.to_string(), "10.9.8.0/24");
    }

    #[test]
    fn test_parse_bad_prefix() {
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(33), None).unwrap_err(),
            SubnetError::InvalidPrefix(33)
        );
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(-1), None).unwrap_err(),
            SubnetError::InvalidPrefix(-1)
        );
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(300), None).unwrap_err(),
            SubnetError::InvalidPrefix(300)
        );
    }

    #[test]
    fn test_parse_bad_address() {
        assert!(matches!(
            CalcRequest::parse("256.0.0.1", Some(24), None),
            Err(SubnetError::InvalidAddressText(_))
        ));
        assert!(matches!(
            CalcRequest::parse("not-an-ip", None, None),
            Err(SubnetError::InvalidAddressText(_))
        ));
    }

    #[test]
    fn test_parse_subnet_count() {
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(24), Some(0)).unwrap_err(),
            SubnetError::InvalidSubnetCount(0)
        );
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(24), Some(-5)).unwrap_err(),
            SubnetError::InvalidSubnetCount(-5)
        );
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(24), Some(300)).unwrap_err(),
            SubnetError::SubnetCountExceedsCapacity {
                requested: 300,
                max: 256,
                prefix: 24
            }
        );
        assert_eq!(
            CalcRequest::parse("10.0.0.0", Some(24), Some(256))
                .unwrap()
                .subnets,
            Some(256)
        );
    }
}
