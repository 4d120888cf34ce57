//! Board-agnostic core logic for the smoke alarm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Concentration sample type and report line formatting
//! - Device mode state machine (Calibrating -> Armed -> Alarming)
//! - Calibration gate holding the device until the air is clean
//! - Duty-cycle sleep controller built from periodic-wake naps
//! - Buzzer tone-burst waveform
//! - The alarm controller tying it all into one control loop
//! - Collaborator traits (sensor, diagnostic reporter)
//! - Configuration with the legacy default values

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod buzzer;
pub mod calibration;
pub mod config;
pub mod controller;
pub mod duty_cycle;
pub mod sample;
pub mod state;
pub mod traits;

#[cfg(test)]
mod mock;

pub use config::AlarmConfig;
pub use controller::{AlarmController, Peripherals};
pub use sample::Sample;
pub use state::{Event, Mode};
