//! Mode definition
//!
//! What the device does on each step (sample, nap, sound the buzzer) is a
//! function of the current mode. Modes only ever move forward.

use super::events::Event;

/// Device modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Power-on warm-up, waiting for clean air before arming
    Calibrating,
    /// Duty-cycling: sample, report, sleep, check threshold
    Armed,
    /// Smoke confirmed; buzzer owns the device until power is removed
    Alarming,
}

impl Mode {
    /// Check if the status indicator should be lit
    pub fn indicator_on(&self) -> bool {
        matches!(self, Mode::Calibrating)
    }

    /// Check if this mode can never be left
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::Alarming)
    }

    /// Process an event and return the next mode
    ///
    /// This is the core transition logic. Only clean air while
    /// calibrating and smoke while armed change the mode.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            (Calibrating, CleanAir(_)) => Armed,
            (Armed, Smoke(_)) => Alarming,

            // Alarming is a latch; nothing leaves it.
            (Alarming, _) => Alarming,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;
    use crate::traits::SensorError;

    fn s(raw: u16) -> Sample {
        Sample::saturating(raw)
    }

    #[test]
    fn test_calibrating_to_armed() {
        let mode = Mode::Calibrating;
        assert_eq!(mode.transition(Event::CleanAir(s(390))), Mode::Armed);
    }

    #[test]
    fn test_calibrating_ignores_smoke() {
        let mode = Mode::Calibrating;
        assert_eq!(mode.transition(Event::Smoke(s(900))), Mode::Calibrating);
    }

    #[test]
    fn test_armed_to_alarming() {
        let mode = Mode::Armed;
        assert_eq!(mode.transition(Event::Smoke(s(650))), Mode::Alarming);
    }

    #[test]
    fn test_armed_stays_armed() {
        let mode = Mode::Armed;
        assert_eq!(mode.transition(Event::CleanAir(s(100))), Mode::Armed);
        assert_eq!(
            mode.transition(Event::SensorFault(SensorError::ConversionTimeout)),
            Mode::Armed
        );
    }

    #[test]
    fn test_alarming_is_a_latch() {
        let events = [
            Event::CleanAir(s(0)),
            Event::Smoke(s(1023)),
            Event::SensorFault(SensorError::OutOfRange),
        ];

        for event in events {
            assert_eq!(Mode::Alarming.transition(event), Mode::Alarming);
        }
    }

    #[test]
    fn test_mode_predicates() {
        assert!(Mode::Calibrating.indicator_on());
        assert!(!Mode::Armed.indicator_on());
        assert!(!Mode::Alarming.indicator_on());

        assert!(Mode::Alarming.is_terminal());
        assert!(!Mode::Armed.is_terminal());
    }
}
