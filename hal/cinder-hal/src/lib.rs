//! Cinder Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the smoke alarm
//! logic is written against. Chip-specific crates (or the generic adapters
//! in `cinder-drivers`) implement them, so the same control loop runs on
//! the target and against mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (cinder-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cinder-core / cinder-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cinder-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  cinder-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Status indicator and buzzer outputs
//! - [`uart::UartTx`] - Diagnostic serial stream
//! - [`adc::AdcConverter`] - On-demand analog conversion
//! - [`sleep::Napper`] - Low-power nap ended by a periodic wake source

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod sleep;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AdcConverter;
pub use gpio::OutputPin;
pub use sleep::Napper;
pub use uart::UartTx;
