//! Embassy async tasks
//!
//! The device has a single thread of control; everything runs in the
//! alarm task.

pub mod alarm;

pub use alarm::alarm_task;
