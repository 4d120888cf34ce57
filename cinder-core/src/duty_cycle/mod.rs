//! Duty-cycle sleep
//!
//! Guarantees a minimum off-time between reports while armed.

pub mod sleep;

pub use sleep::SleepController;
