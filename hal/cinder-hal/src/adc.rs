//! Analog-to-digital conversion abstraction
//!
//! Mirrors the way single-shot converters are driven: start a conversion,
//! poll the completion flag, then read the result register.

/// Single-channel, on-demand analog converter
pub trait AdcConverter {
    /// Start a conversion on the configured input
    fn trigger_conversion(&mut self);

    /// Check whether the last triggered conversion has finished
    fn is_conversion_complete(&mut self) -> bool;

    /// Read the raw result of the last completed conversion
    fn read_converted_value(&mut self) -> u16;

    /// Native resolution of the converter in bits
    fn resolution_bits(&self) -> u8;
}
