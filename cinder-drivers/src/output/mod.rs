//! Digital outputs

pub mod pin;

pub use pin::{ActiveLevel, HalOutput};
