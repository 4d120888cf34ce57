//! Diagnostic reporters

pub mod io;
pub mod serial;

pub use io::IoUart;
pub use serial::SerialReporter;
