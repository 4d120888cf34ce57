//! Configuration types
//!
//! The device is not reconfigurable at runtime; these types only give the
//! legacy magic numbers names and units. The shipped defaults are checked
//! at compile time.

pub mod types;

pub use types::*;
