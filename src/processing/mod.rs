//! Subnet calculation logic.
//!
//! - [`input`] - validating user input into a [`CalcRequest`]
//! - [`partition`] - splitting a network into equal subnets

mod input;
mod partition;

// Re-export public functions
pub use input::{prefix_from_int, CalcRequest, DEFAULT_PREFIX};
pub use partition::{minimal_prefix_for, Partitioner, DEFAULT_MAX_SUBNETS};
