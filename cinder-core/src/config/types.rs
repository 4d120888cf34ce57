//! Configuration type definitions

use crate::sample::Sample;

/// Errors found while validating an [`AlarmConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `alarm_floor` is not strictly above `clean_air_ceiling`
    ThresholdOrder,
    /// A threshold lies outside the sample domain
    ThresholdOutOfRange,
    /// A sleep cycle must contain at least one nap
    ZeroNaps,
    /// Nap period must be non-zero
    ZeroNapPeriod,
    /// A tone burst must contain at least one toggle
    ZeroToggles,
    /// Tone timer tick must be non-zero
    ZeroTimerTick,
}

/// Sample thresholds (sample units, 0-1023)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Sample must be below this to leave calibration
    pub clean_air_ceiling: u16,
    /// Sample at or above this while armed raises the alarm
    pub alarm_floor: u16,
}

impl Thresholds {
    pub const DEFAULT: Self = Self {
        clean_air_ceiling: 400,
        alarm_floor: 600,
    };

    /// Air is clean enough to arm
    pub const fn is_clean(&self, sample: Sample) -> bool {
        sample.value() < self.clean_air_ceiling
    }

    /// Smoke is present
    pub const fn is_smoke(&self, sample: Sample) -> bool {
        sample.value() >= self.alarm_floor
    }
}

/// Duty-cycle timing while armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycleConfig {
    /// Naps per sleep cycle (nap units)
    pub naps_per_cycle: u8,
    /// Length of one nap in milliseconds (the wake source period)
    pub nap_period_ms: u32,
    /// Pause after a report so the transmitter drains before napping (ms)
    pub report_settle_ms: u32,
}

impl DutyCycleConfig {
    pub const DEFAULT: Self = Self {
        naps_per_cycle: 15,
        nap_period_ms: 4000,
        report_settle_ms: 10,
    };

    /// Nominal sleep per cycle in milliseconds, saturating at `u32::MAX`
    pub const fn cycle_sleep_ms(&self) -> u32 {
        (self.naps_per_cycle as u32).saturating_mul(self.nap_period_ms)
    }
}

/// Calibration gate timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Delay between calibration attempts (ms)
    pub retry_delay_ms: u32,
    /// Attempts after which the status indicator starts blinking.
    /// `None` keeps it steady forever.
    pub stall_after_attempts: Option<u32>,
}

impl CalibrationConfig {
    pub const DEFAULT: Self = Self {
        retry_delay_ms: 100,
        stall_after_attempts: Some(3000),
    };
}

/// Alarm tone timing
///
/// The tone period comes from an 8-bit up-counter preloaded with
/// `timer_preload` that toggles the buzzer on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    /// Output toggles per burst
    pub toggles_per_burst: u16,
    /// Counter preload value (counts up to 256)
    pub timer_preload: u8,
    /// Counter tick in microseconds
    pub timer_tick_us: u16,
    /// Silent rest after each burst (ms)
    pub rest_ms: u32,
}

impl ToneConfig {
    pub const DEFAULT: Self = Self {
        toggles_per_burst: 350,
        timer_preload: 131,
        timer_tick_us: 4,
        rest_ms: 100,
    };

    /// Time between output toggles in microseconds
    pub const fn half_period_us(&self) -> u32 {
        (256 - self.timer_preload as u32) * self.timer_tick_us as u32
    }

    /// Tone frequency in hertz
    pub const fn frequency_hz(&self) -> u32 {
        let period = 2 * self.half_period_us();
        if period == 0 {
            0
        } else {
            1_000_000 / period
        }
    }

    /// Audible part of one burst in microseconds
    pub const fn burst_us(&self) -> u32 {
        self.toggles_per_burst as u32 * self.half_period_us()
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmConfig {
    pub thresholds: Thresholds,
    pub duty_cycle: DutyCycleConfig,
    pub calibration: CalibrationConfig,
    pub tone: ToneConfig,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AlarmConfig {
    /// Legacy behaviour
    pub const DEFAULT: Self = Self {
        thresholds: Thresholds::DEFAULT,
        duty_cycle: DutyCycleConfig::DEFAULT,
        calibration: CalibrationConfig::DEFAULT,
        tone: ToneConfig::DEFAULT,
    };

    /// Check internal consistency
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.clean_air_ceiling > Sample::MAX.value() || t.alarm_floor > Sample::MAX.value() {
            return Err(ConfigError::ThresholdOutOfRange);
        }
        if t.alarm_floor <= t.clean_air_ceiling {
            return Err(ConfigError::ThresholdOrder);
        }
        if self.duty_cycle.naps_per_cycle == 0 {
            return Err(ConfigError::ZeroNaps);
        }
        if self.duty_cycle.nap_period_ms == 0 {
            return Err(ConfigError::ZeroNapPeriod);
        }
        if self.tone.toggles_per_burst == 0 {
            return Err(ConfigError::ZeroToggles);
        }
        if self.tone.timer_tick_us == 0 {
            return Err(ConfigError::ZeroTimerTick);
        }
        Ok(())
    }

    /// `const` form of [`AlarmConfig::validate`] for compile-time assertions
    pub const fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

const _: () = assert!(AlarmConfig::DEFAULT.is_valid());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_defaults() {
        let config = AlarmConfig::default();
        assert_eq!(config.thresholds.clean_air_ceiling, 400);
        assert_eq!(config.thresholds.alarm_floor, 600);
        assert_eq!(config.duty_cycle.naps_per_cycle, 15);
        assert_eq!(config.tone.toggles_per_burst, 350);
        assert_eq!(config.tone.timer_preload, 131);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_tone_timing() {
        let tone = ToneConfig::DEFAULT;
        // (256 - 131) ticks * 4 us = 500 us per toggle -> 1 kHz
        assert_eq!(tone.half_period_us(), 500);
        assert_eq!(tone.frequency_hz(), 1000);
        assert_eq!(tone.burst_us(), 175_000);
    }

    #[test]
    fn test_cycle_sleep_is_one_minute() {
        assert_eq!(DutyCycleConfig::DEFAULT.cycle_sleep_ms(), 60_000);
    }

    #[test]
    fn test_long_cycle_sleep_saturates() {
        let duty_cycle = DutyCycleConfig {
            naps_per_cycle: 255,
            nap_period_ms: 20_000_000,
            report_settle_ms: 10,
        };
        assert_eq!(duty_cycle.cycle_sleep_ms(), u32::MAX);
    }

    #[test]
    fn test_threshold_order_rejected() {
        let mut config = AlarmConfig::DEFAULT;
        config.thresholds.alarm_floor = 400;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));

        config.thresholds.alarm_floor = 300;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));
    }

    #[test]
    fn test_threshold_range_rejected() {
        let mut config = AlarmConfig::DEFAULT;
        config.thresholds.alarm_floor = 1024;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOutOfRange));
    }

    #[test]
    fn test_zero_counts_rejected() {
        let mut config = AlarmConfig::DEFAULT;
        config.duty_cycle.naps_per_cycle = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroNaps));

        let mut config = AlarmConfig::DEFAULT;
        config.tone.toggles_per_burst = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroToggles));

        let mut config = AlarmConfig::DEFAULT;
        config.duty_cycle.nap_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroNapPeriod));
    }

    #[test]
    fn test_threshold_predicates() {
        let t = Thresholds::DEFAULT;
        assert!(t.is_clean(Sample::saturating(399)));
        assert!(!t.is_clean(Sample::saturating(400)));
        assert!(!t.is_smoke(Sample::saturating(599)));
        assert!(t.is_smoke(Sample::saturating(600)));
    }
}
