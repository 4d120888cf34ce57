//! Diagnostic reporter trait

use crate::sample::Sample;

/// Errors from the diagnostic sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// Sink rejected or could not accept the line
    SinkUnavailable,
}

/// Emits one human-readable line per sample
///
/// Reporting is best-effort. Callers log and count failures but never
/// stop sampling because of them.
pub trait DiagnosticReporter {
    /// Write `sample` as one diagnostic line
    fn report(&mut self, sample: Sample) -> Result<(), ReportError>;
}

impl<T: DiagnosticReporter + ?Sized> DiagnosticReporter for &mut T {
    fn report(&mut self, sample: Sample) -> Result<(), ReportError> {
        T::report(self, sample)
    }
}
