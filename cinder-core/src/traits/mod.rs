//! Collaborator traits
//!
//! These traits define the interface between the control logic and the
//! sensor and diagnostic collaborators. Concrete implementations live in
//! `cinder-drivers`.

pub mod report;
pub mod sensor;

pub use report::{DiagnosticReporter, ReportError};
pub use sensor::{SampleSource, SensorError};
