//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in cinder-core and cinder-hal:
//!
//! - Sensor reader over a single-shot ADC with bounded polling
//! - Serial diagnostic reporter
//! - Output pin adapter for `embedded-hal` GPIO (status LED, buzzer)
//! - UART adapter for `embedded-io` writers
//! - Timer-backed napper for the duty-cycle sleep

#![no_std]
#![deny(unsafe_code)]

pub mod output;
pub mod report;
pub mod sensor;
pub mod sleep;
