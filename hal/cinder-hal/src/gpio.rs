//! GPIO pin abstractions
//!
//! Digital outputs drive the status indicator and the buzzer.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn toggle(&mut self) {
        T::toggle(self)
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Latch {
        high: bool,
    }

    impl OutputPin for Latch {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_default_toggle() {
        let mut pin = Latch { high: false };
        pin.toggle();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_set_state_through_reference() {
        let mut pin = Latch { high: false };
        let mut by_ref = &mut pin;
        by_ref.set_state(true);
        assert!(by_ref.is_set_high());
        by_ref.set_state(false);
        assert!(pin.is_set_low());
    }
}
