//! Calibration gate implementation
//!
//! Each attempt reads and reports one sample. Below the clean-air ceiling
//! the gate opens and clears the status indicator; otherwise it lights the
//! indicator and waits a short retry delay. The gate never times out. Past
//! the stall limit it only changes how the indicator looks (blinking
//! instead of steady) so a smoky or faulty boot is visible.

use cinder_hal::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::{CalibrationConfig, Thresholds};
use crate::controller::Diagnostics;
use crate::sample::Sample;
use crate::state::Event;
use crate::traits::{DiagnosticReporter, SampleSource};

/// Calibration has not seen clean air within the stall limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationTimeout {
    /// Attempts made so far
    pub attempts: u32,
}

/// Result of one calibration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStatus {
    /// Clean air seen; the gate is open
    Clean(Sample),
    /// Still waiting; carries the classified read
    Waiting(Event),
    /// Still waiting past the stall limit
    Stalled(CalibrationTimeout),
}

impl CalibrationStatus {
    /// Check if the gate opened on this attempt
    pub fn is_clean(&self) -> bool {
        matches!(self, CalibrationStatus::Clean(_))
    }
}

/// Boot-time gate waiting for clean air
#[derive(Debug, Clone)]
pub struct CalibrationGate {
    config: CalibrationConfig,
    thresholds: Thresholds,
    attempts: u32,
    stalled: bool,
}

impl CalibrationGate {
    /// Create a new gate
    pub fn new(config: CalibrationConfig, thresholds: Thresholds) -> Self {
        Self {
            config,
            thresholds,
            attempts: 0,
            stalled: false,
        }
    }

    /// Run one attempt
    ///
    /// Sensor faults count as not-clean and are not reported. Report
    /// failures are recorded in `diagnostics` and otherwise ignored.
    ///
    /// The clean check comes straight after the report: a clean attempt
    /// clears the indicator and returns without lighting it first and
    /// without the retry delay.
    pub async fn attempt<S, R, L, D>(
        &mut self,
        sensor: &mut S,
        reporter: &mut R,
        indicator: &mut L,
        delay: &mut D,
        diagnostics: &mut Diagnostics,
    ) -> CalibrationStatus
    where
        S: SampleSource,
        R: DiagnosticReporter,
        L: OutputPin,
        D: DelayNs,
    {
        self.attempts = self.attempts.saturating_add(1);
        diagnostics.calibration_attempts = self.attempts;

        let event = Event::classify(sensor.read(), &self.thresholds);
        match event.sample() {
            Some(sample) => diagnostics.record_report(reporter.report(sample)),
            None => diagnostics.record_sensor_fault(),
        }

        if let Event::CleanAir(sample) = event {
            indicator.set_low();
            info!("Clean air ({}) after {} attempts", sample.value(), self.attempts);
            return CalibrationStatus::Clean(sample);
        }

        let status = match self.config.stall_after_attempts {
            Some(limit) if self.attempts >= limit => {
                if !self.stalled {
                    self.stalled = true;
                    warn!("Calibration stalled after {} attempts", self.attempts);
                }
                indicator.toggle();
                CalibrationStatus::Stalled(CalibrationTimeout {
                    attempts: self.attempts,
                })
            }
            _ => {
                indicator.set_high();
                CalibrationStatus::Waiting(event)
            }
        };

        delay.delay_ms(self.config.retry_delay_ms).await;
        status
    }

    /// Block until clean air is seen
    ///
    /// Unbounded: with a sensor that never reads clean this never returns.
    pub async fn run<S, R, L, D>(
        &mut self,
        sensor: &mut S,
        reporter: &mut R,
        indicator: &mut L,
        delay: &mut D,
        diagnostics: &mut Diagnostics,
    ) -> Sample
    where
        S: SampleSource,
        R: DiagnosticReporter,
        L: OutputPin,
        D: DelayNs,
    {
        loop {
            let status = self
                .attempt(sensor, reporter, indicator, delay, diagnostics)
                .await;
            if let CalibrationStatus::Clean(sample) = status {
                return sample;
            }
        }
    }

    /// Attempts made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Check if the stall limit has been passed
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }
}
