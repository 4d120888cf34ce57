//! Runtime counters
//!
//! Kept in RAM only; they reset with the device.

use crate::traits::ReportError;

/// Counters describing what the controller has done since boot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Diagnostics {
    /// Calibration attempts made
    pub calibration_attempts: u32,
    /// Armed duty cycles completed
    pub cycles: u32,
    /// Diagnostic lines written
    pub lines_reported: u32,
    /// Sensor reads that failed
    pub sensor_faults: u32,
    /// Diagnostic lines the sink rejected
    pub report_failures: u32,
    /// Alarm bursts sounded
    pub alarm_bursts: u32,
}

impl Diagnostics {
    /// Record the outcome of one report
    pub fn record_report(&mut self, result: Result<(), ReportError>) {
        match result {
            Ok(()) => self.lines_reported = self.lines_reported.saturating_add(1),
            Err(e) => {
                self.report_failures = self.report_failures.saturating_add(1);
                debug!("Diagnostic report dropped: {:?}", e);
            }
        }
    }

    /// Record a failed sensor read
    pub fn record_sensor_fault(&mut self) {
        self.sensor_faults = self.sensor_faults.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counters() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record_report(Ok(()));
        diagnostics.record_report(Err(ReportError::SinkUnavailable));
        diagnostics.record_report(Ok(()));

        assert_eq!(diagnostics.lines_reported, 2);
        assert_eq!(diagnostics.report_failures, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut diagnostics = Diagnostics {
            sensor_faults: u32::MAX,
            ..Default::default()
        };
        diagnostics.record_sensor_fault();
        assert_eq!(diagnostics.sensor_faults, u32::MAX);
    }
}
