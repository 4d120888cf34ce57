//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{Adc, Blocking, Channel};

/// Native RP2040 ADC resolution
pub const ADC_BITS: u8 = 12;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// Single-shot converter on one RP2040 ADC channel
///
/// The RP2040 conversion takes 2 us and embassy-rp exposes it as one
/// blocking call, so the conversion runs on trigger and the result is
/// latched until read. A failed conversion never reports completion,
/// which the sensor driver turns into a timeout.
pub struct Rp2040Adc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    latched: Option<u16>,
}

impl<'d> Rp2040Adc<'d> {
    /// Create a converter for `channel`
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            latched: None,
        }
    }
}

impl<'d> cinder_hal::AdcConverter for Rp2040Adc<'d> {
    fn trigger_conversion(&mut self) {
        self.latched = self.adc.blocking_read(&mut self.channel).ok();
    }

    fn is_conversion_complete(&mut self) -> bool {
        self.latched.is_some()
    }

    fn read_converted_value(&mut self) -> u16 {
        self.latched.take().unwrap_or(0)
    }

    fn resolution_bits(&self) -> u8 {
        ADC_BITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_mapping() {
        for channel in [
            AdcChannel::Adc0,
            AdcChannel::Adc1,
            AdcChannel::Adc2,
            AdcChannel::Adc3,
        ] {
            let gpio = channel.gpio().unwrap();
            assert_eq!(AdcChannel::from_gpio(gpio), Some(channel));
        }

        assert_eq!(AdcChannel::Temperature.gpio(), None);
        assert_eq!(AdcChannel::from_gpio(25), None);
    }
}
