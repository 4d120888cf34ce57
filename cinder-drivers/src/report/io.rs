//! `embedded-io` UART adapter
//!
//! Lets any blocking `embedded_io::Write` (HAL UART transmitters, USB
//! serial, host buffers) serve as the diagnostic sink.

use cinder_hal::UartTx;

/// Adapts an [`embedded_io::Write`] to [`UartTx`]
pub struct IoUart<W> {
    writer: W,
}

impl<W: embedded_io::Write> IoUart<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write> UartTx for IoUart<W> {
    type Error = W::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
