//! Concentration sensor drivers

pub mod adc;

pub use adc::{AdcSensor, AdcSensorConfig};
