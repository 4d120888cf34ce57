//! RP2040-specific HAL for the smoke alarm firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `cinder-hal` traits, plus the board wiring:
//!
//! - ADC channel mapping and a single-shot converter (implements
//!   `cinder_hal::AdcConverter`)
//! - Board pin assignments

#![no_std]

pub mod adc;
pub mod board;

pub use adc::{AdcChannel, Rp2040Adc};
