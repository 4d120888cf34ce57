//! Serial diagnostic reporter
//!
//! Writes one `<decimal>\r\n` line per sample to a UART. Each byte blocks
//! until the transmitter accepts it; a sink error drops the rest of the
//! line and is reported to the caller as [`ReportError::SinkUnavailable`].

use cinder_core::sample::{format_report_line, Sample};
use cinder_core::traits::{DiagnosticReporter, ReportError};
use cinder_hal::UartTx;

/// Line-per-sample reporter over a UART transmitter
pub struct SerialReporter<U> {
    uart: U,
}

impl<U: UartTx> SerialReporter<U> {
    /// Create a new reporter
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Get access to the underlying UART
    pub fn uart(&self) -> &U {
        &self.uart
    }
}

impl<U: UartTx> DiagnosticReporter for SerialReporter<U> {
    fn report(&mut self, sample: Sample) -> Result<(), ReportError> {
        let line = format_report_line(sample);
        self.uart
            .write_blocking(line.as_bytes())
            .map_err(|_| ReportError::SinkUnavailable)
    }
}
