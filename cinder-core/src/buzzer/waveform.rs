//! Buzzer waveform driver
//!
//! Produces an audible tone by toggling the buzzer output once per timer
//! period for a fixed number of toggles, then forces the output low and
//! rests. Repeating bursts give a periodic warning rather than a steady
//! siren.

use cinder_hal::OutputPin;
use embedded_hal::delay::DelayNs as ToneDelay;
use embedded_hal_async::delay::DelayNs;

use crate::config::ToneConfig;

/// Tone-burst generator for a piezo or magnetic buzzer
///
/// The audible half uses a blocking delay: at audio rates the wait is far
/// shorter than any scheduler tick. The rest uses the async delay so the
/// executor can idle.
pub struct BuzzerDriver<P, T> {
    pin: P,
    tone_delay: T,
    config: ToneConfig,
    bursts: u32,
}

impl<P: OutputPin, T: ToneDelay> BuzzerDriver<P, T> {
    /// Create a new buzzer driver
    ///
    /// The output is driven low immediately so the buzzer starts silent.
    pub fn new(mut pin: P, tone_delay: T, config: ToneConfig) -> Self {
        pin.set_low();
        Self {
            pin,
            tone_delay,
            config,
            bursts: 0,
        }
    }

    /// Emit the audible half of one burst
    ///
    /// Returns the number of toggles performed. The output is low on return.
    pub fn tone(&mut self) -> u16 {
        let half_period_us = self.config.half_period_us();

        for _ in 0..self.config.toggles_per_burst {
            self.tone_delay.delay_us(half_period_us);
            self.pin.toggle();
        }

        self.pin.set_low();
        self.config.toggles_per_burst
    }

    /// One full alarm burst: tone, then silent rest
    pub async fn alarm_burst<D: DelayNs>(&mut self, delay: &mut D) {
        self.tone();
        delay.delay_ms(self.config.rest_ms).await;
        self.bursts = self.bursts.saturating_add(1);
    }

    /// Completed bursts since creation
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    /// Get access to the underlying output pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
