//! Calibration gate
//!
//! Holds the device at boot until the sensor has warmed up and reads clean
//! air, so residual warm-up drift cannot trigger a false alarm.

pub mod gate;

pub use gate::{CalibrationGate, CalibrationStatus, CalibrationTimeout};
