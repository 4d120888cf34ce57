//! `embedded-hal` output pin adapter
//!
//! Wraps an `embedded_hal::digital::OutputPin` as a [`cinder_hal::OutputPin`].
//! The pin can be configured as active-high (default) or active-low, so an
//! LED wired to VCC or a buzzer behind an inverting transistor still reads
//! "high = on" to the controller.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;

/// Electrical level that means "on"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// GPIO output driven through `embedded-hal`
///
/// Only infallible pins are accepted; the logical state is cached so no
/// read-back is needed.
pub struct HalOutput<P> {
    pin: P,
    active: ActiveLevel,
    /// Current logical state (true = on)
    on: bool,
}

impl<P: EhOutputPin<Error = Infallible>> HalOutput<P> {
    /// Create a new output, initially off
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        let mut output = Self {
            pin,
            active,
            on: false,
        };
        output.drive(false);
        output
    }

    /// Create an active-high output
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Create an active-low output
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    fn drive(&mut self, on: bool) {
        self.on = on;

        let electrical_high = on == (self.active == ActiveLevel::High);
        let _ = if electrical_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

impl<P: EhOutputPin<Error = Infallible>> cinder_hal::OutputPin for HalOutput<P> {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn toggle(&mut self) {
        self.drive(!self.on);
    }

    fn is_set_high(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_hal::OutputPin;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                writes: 0,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl EhOutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_output() {
        let mut out = HalOutput::active_high(MockPin::new());

        // Initially off
        assert!(out.is_set_low());
        assert!(!out.pin.high);

        out.set_high();
        assert!(out.is_set_high());
        assert!(out.pin.high);

        out.toggle();
        assert!(out.is_set_low());
        assert!(!out.pin.high);
    }

    #[test]
    fn test_active_low_output() {
        let mut out = HalOutput::active_low(MockPin::new());

        // Off means electrically high for active-low
        assert!(out.is_set_low());
        assert!(out.pin.high);

        out.set_high();
        assert!(out.is_set_high());
        assert!(!out.pin.high);

        out.set_low();
        assert!(out.pin.high);
    }

    #[test]
    fn test_every_toggle_writes_the_pin() {
        let mut out = HalOutput::active_high(MockPin::new());
        for _ in 0..350 {
            out.toggle();
        }
        // One write at construction plus one per toggle
        assert_eq!(out.pin.writes, 351);
        assert!(out.is_set_low());
    }
}
