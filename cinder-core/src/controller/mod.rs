//! Alarm controller
//!
//! Owns every peripheral and runs the calibrate -> armed -> alarming loop.

pub mod alarm;
pub mod diagnostics;

pub use alarm::{AlarmController, CycleOutcome, Peripherals};
pub use diagnostics::Diagnostics;
