//! Error types for subnet calculations.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid prefix length /{0}, must be between 0 and 32.")]
    InvalidPrefix(i64),

    #[error("Requested number of subnets ({requested}) exceeds the maximum possible ({max}) with CIDR {prefix}.")]
    SubnetCountExceedsCapacity { requested: u64, max: u64, prefix: u8 },

    #[error("Invalid number of subnets ({0}), must be at least 1.")]
    InvalidSubnetCount(i64),

    #[error("Invalid address: {0}")]
    InvalidAddressText(String),

    #[error("Prefix /{embedded} in address conflicts with --cidr {explicit}")]
    ConflictingPrefix { embedded: u8, explicit: u8 },

    #[error("Network /{from} can only be split into smaller subnets, not /{to}")]
    InvalidSplit { from: u8, to: u8 },

    #[error("Split would produce {count} subnets, more than the limit of {limit}")]
    SplitTooLarge { count: u64, limit: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl SubnetError {
    /// True for errors caused by the address, prefix or subnet count the
    /// user supplied, as opposed to configuration or output failures.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SubnetError::Config(_) | SubnetError::Output(_))
    }

    /// One-line message for stderr.
    pub fn report(&self) -> String {
        if self.is_input_error() {
            format!("Input validation error: {self}")
        } else {
            format!("Error: {self}")
        }
    }
}
