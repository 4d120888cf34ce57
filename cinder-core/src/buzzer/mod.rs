//! Alarm buzzer
//!
//! Drives the tone-burst/rest pattern once the device is alarming.

pub mod waveform;

pub use waveform::BuzzerDriver;
