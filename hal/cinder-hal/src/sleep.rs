//! Low-power napping
//!
//! A nap parks the core in its deepest usable sleep state until the next
//! tick of a periodic wake source (a watchdog interrupt, an RTC alarm or a
//! low-power timer). The wake carries no payload.

use core::future::Future;

/// Periodic-wake low-power nap
pub trait Napper {
    /// Sleep until the next periodic wake
    ///
    /// Completes after one wake-source period. There is no early wake.
    fn nap(&mut self) -> impl Future<Output = ()>;

    /// Nominal length of one nap in milliseconds
    fn nap_period_ms(&self) -> u32;
}
