//! Analog gas sensor on a single-shot ADC
//!
//! Typical parts are MQ-series heated-element sensors whose analog output
//! rises with smoke concentration. The driver triggers a conversion, polls
//! the completion flag a bounded number of times and normalizes the
//! converter's native resolution to the 10-bit sample domain.

use cinder_core::sample::{Sample, SAMPLE_BITS};
use cinder_core::traits::{SampleSource, SensorError};
use cinder_hal::AdcConverter;

/// ADC sensor configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcSensorConfig {
    /// Completion polls before giving up on a conversion
    pub poll_limit: u32,
}

impl Default for AdcSensorConfig {
    fn default() -> Self {
        Self {
            // A 125 kHz AVR conversion finishes in ~13 ADC clocks; this
            // leaves orders of magnitude of headroom on any MCU.
            poll_limit: 10_000,
        }
    }
}

/// Gas sensor read through an [`AdcConverter`]
pub struct AdcSensor<ADC> {
    adc: ADC,
    config: AdcSensorConfig,
}

impl<ADC: AdcConverter> AdcSensor<ADC> {
    /// Create a new sensor reader
    pub fn new(adc: ADC, config: AdcSensorConfig) -> Self {
        Self { adc, config }
    }

    /// Scale a raw reading of `bits` resolution to the sample domain
    ///
    /// Rejects raw values that do not fit the declared resolution.
    pub fn normalize(raw: u16, bits: u8) -> Result<Sample, SensorError> {
        if bits == 0 || bits > 16 || (bits < 16 && raw >> bits != 0) {
            return Err(SensorError::OutOfRange);
        }

        let scaled = if bits >= SAMPLE_BITS {
            raw >> (bits - SAMPLE_BITS)
        } else {
            raw << (SAMPLE_BITS - bits)
        };

        Sample::new(scaled).ok_or(SensorError::OutOfRange)
    }

    /// Get access to the underlying converter
    pub fn adc(&self) -> &ADC {
        &self.adc
    }
}

impl<ADC: AdcConverter> SampleSource for AdcSensor<ADC> {
    fn read(&mut self) -> Result<Sample, SensorError> {
        self.adc.trigger_conversion();

        let mut polls = 0;
        while !self.adc.is_conversion_complete() {
            polls += 1;
            if polls >= self.config.poll_limit {
                return Err(SensorError::ConversionTimeout);
            }
        }

        let raw = self.adc.read_converted_value();
        Self::normalize(raw, self.adc.resolution_bits())
    }
}

/// Scripted converter for testing
#[cfg(test)]
pub struct DummyAdc {
    pub value: u16,
    pub bits: u8,
    /// Polls reporting "busy" before completion; `None` never completes
    pub busy_polls: Option<u32>,
    pub triggers: u32,
    polls: u32,
}

#[cfg(test)]
impl DummyAdc {
    pub fn new(value: u16, bits: u8) -> Self {
        Self {
            value,
            bits,
            busy_polls: Some(0),
            triggers: 0,
            polls: 0,
        }
    }
}

#[cfg(test)]
impl AdcConverter for DummyAdc {
    fn trigger_conversion(&mut self) {
        self.triggers += 1;
        self.polls = 0;
    }

    fn is_conversion_complete(&mut self) -> bool {
        match self.busy_polls {
            Some(busy) if self.polls >= busy => true,
            _ => {
                self.polls += 1;
                false
            }
        }
    }

    fn read_converted_value(&mut self) -> u16 {
        self.value
    }

    fn resolution_bits(&self) -> u8 {
        self.bits
    }
}
