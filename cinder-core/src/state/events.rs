//! Events that trigger mode transitions

use crate::sample::Sample;
use crate::traits::SensorError;

/// Events produced by classifying a sensor read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Sample below the clean-air ceiling
    CleanAir(Sample),
    /// Sample at or above the alarm floor
    Smoke(Sample),
    /// Sample between the two thresholds
    Elevated(Sample),
    /// Sensor read failed
    SensorFault(SensorError),
}

impl Event {
    /// Classify a read against the configured thresholds
    pub fn classify(
        read: Result<Sample, SensorError>,
        thresholds: &crate::config::Thresholds,
    ) -> Self {
        match read {
            Ok(sample) if thresholds.is_smoke(sample) => Event::Smoke(sample),
            Ok(sample) if thresholds.is_clean(sample) => Event::CleanAir(sample),
            Ok(sample) => Event::Elevated(sample),
            Err(e) => Event::SensorFault(e),
        }
    }

    /// Sample carried by this event, if any
    pub fn sample(&self) -> Option<Sample> {
        match self {
            Event::CleanAir(s) | Event::Smoke(s) | Event::Elevated(s) => Some(*s),
            Event::SensorFault(_) => None,
        }
    }

    /// Check if this event indicates a sensor fault
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::SensorFault(_))
    }
}
