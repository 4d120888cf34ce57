//! Sleep controller
//!
//! One sleep cycle is a fixed number of consecutive naps. Splitting the
//! interval into naps bounds how long any single low-power period lasts;
//! the wake source decides each nap's length. There is no early wake.

use cinder_hal::Napper;

/// Composes naps into fixed-length sleep cycles
pub struct SleepController<N> {
    napper: N,
    naps_per_cycle: u8,
    /// Naps left in the cycle in progress
    remaining: u8,
    cycles: u32,
}

impl<N: Napper> SleepController<N> {
    /// Create a sleep controller taking `naps_per_cycle` naps per cycle
    pub fn new(napper: N, naps_per_cycle: u8) -> Self {
        Self {
            napper,
            naps_per_cycle,
            remaining: 0,
            cycles: 0,
        }
    }

    /// Sleep for one full cycle
    ///
    /// Always takes exactly `naps_per_cycle` naps and returns that count.
    pub async fn sleep_cycle(&mut self) -> u8 {
        self.remaining = self.naps_per_cycle;
        trace!("Sleeping {} naps", self.remaining);

        while self.remaining > 0 {
            self.napper.nap().await;
            self.remaining -= 1;
        }

        self.cycles = self.cycles.saturating_add(1);
        self.naps_per_cycle
    }

    /// Nominal length of one cycle in milliseconds, saturating at `u32::MAX`
    pub fn cycle_ms(&self) -> u32 {
        (self.naps_per_cycle as u32).saturating_mul(self.napper.nap_period_ms())
    }

    /// Completed sleep cycles
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Get access to the underlying napper
    pub fn napper(&self) -> &N {
        &self.napper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::CountingNapper;
    use embassy_futures::block_on;

    #[test]
    fn test_cycle_takes_configured_naps() {
        let mut sleep = SleepController::new(CountingNapper::default(), 15);

        assert_eq!(block_on(sleep.sleep_cycle()), 15);
        assert_eq!(sleep.napper().naps, 15);
        assert_eq!(sleep.cycles(), 1);
    }

    #[test]
    fn test_budget_resets_each_cycle() {
        let mut sleep = SleepController::new(CountingNapper::default(), 15);

        for _ in 0..4 {
            block_on(sleep.sleep_cycle());
        }

        assert_eq!(sleep.napper().naps, 60);
        assert_eq!(sleep.cycles(), 4);
    }

    #[test]
    fn test_nominal_cycle_length() {
        let sleep = SleepController::new(CountingNapper::default(), 15);
        assert_eq!(sleep.cycle_ms(), 60_000);
    }

    #[test]
    fn test_cycle_length_saturates() {
        let sleep = SleepController::new(CountingNapper::with_period(20_000_000), 255);
        assert_eq!(sleep.cycle_ms(), u32::MAX);
    }
}
