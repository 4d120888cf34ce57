//! Timer-backed napper
//!
//! On async executors an awaited timer is the periodic wake source: the
//! executor parks the core (WFI/WFE) until the timer interrupt fires, which
//! plays the role a watchdog interrupt plays on bare-metal AVR parts.

use cinder_hal::Napper;
use embedded_hal_async::delay::DelayNs;

/// Default wake period, matching a 4 s watchdog
pub const DEFAULT_NAP_PERIOD_MS: u32 = 4000;

/// Napper sleeping for a fixed period on an async delay
pub struct TimerNapper<D> {
    delay: D,
    period_ms: u32,
}

impl<D: DelayNs> TimerNapper<D> {
    /// Create a napper with the given wake period
    pub fn new(delay: D, period_ms: u32) -> Self {
        Self { delay, period_ms }
    }
}

impl<D: DelayNs> Napper for TimerNapper<D> {
    async fn nap(&mut self) {
        self.delay.delay_ms(self.period_ms).await;
    }

    fn nap_period_ms(&self) -> u32 {
        self.period_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_core::duty_cycle::SleepController;
    use embassy_futures::block_on;

    #[derive(Default)]
    struct ClockDelay {
        elapsed_ms: u64,
        calls: u32,
    }

    impl DelayNs for ClockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ms += u64::from(ns) / 1_000_000;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.elapsed_ms += u64::from(ms);
            self.calls += 1;
        }
    }

    #[test]
    fn test_single_nap() {
        let mut napper = TimerNapper::new(ClockDelay::default(), DEFAULT_NAP_PERIOD_MS);
        block_on(napper.nap());

        assert_eq!(napper.delay.elapsed_ms, 4000);
        assert_eq!(napper.nap_period_ms(), 4000);
    }

    #[test]
    fn test_full_cycle_sleeps_one_minute() {
        let napper = TimerNapper::new(ClockDelay::default(), DEFAULT_NAP_PERIOD_MS);
        let mut sleep = SleepController::new(napper, 15);

        block_on(sleep.sleep_cycle());

        assert_eq!(sleep.napper().delay.elapsed_ms, 60_000);
        assert_eq!(sleep.napper().delay.calls, 15);
        assert_eq!(sleep.cycle_ms(), 60_000);
    }
}
