//! Board pin assignments
//!
//! Raspberry Pi Pico wiring:
//!
//! | signal            | pin    |
//! |-------------------|--------|
//! | diagnostic UART TX| GPIO0  |
//! | status LED        | GPIO25 (on-board) |
//! | buzzer            | GPIO15 |
//! | MQ-2 analog out   | GPIO26 (ADC0) |
//!
//! [`Board::take`] is the only place the peripherals are picked, so the
//! pin numbers below and the pins actually driven stay in one file.

use embassy_rp::peripherals::{ADC, PIN_0, PIN_15, PIN_25, PIN_26, UART0};
use embassy_rp::{Peri, Peripherals};

use crate::adc::AdcChannel;

/// Peripherals used by the smoke alarm, taken from the chip by role
pub struct Board {
    /// Diagnostic UART
    pub uart: Peri<'static, UART0>,
    /// Diagnostic UART TX pin
    pub uart_tx: Peri<'static, PIN_0>,
    /// ADC block
    pub adc: Peri<'static, ADC>,
    /// Gas sensor analog input
    pub sensor: Peri<'static, PIN_26>,
    /// On-board LED used as the calibration indicator
    pub status_led: Peri<'static, PIN_25>,
    /// Buzzer drive pin
    pub buzzer: Peri<'static, PIN_15>,
}

impl Board {
    /// GPIO number of [`Board::uart_tx`]
    pub const UART_TX_GPIO: u8 = 0;
    /// GPIO number of [`Board::status_led`]
    pub const STATUS_LED_GPIO: u8 = 25;
    /// GPIO number of [`Board::buzzer`]
    pub const BUZZER_GPIO: u8 = 15;
    /// GPIO number of [`Board::sensor`]
    pub const SENSOR_GPIO: u8 = 26;
    /// ADC channel wired to [`Board::sensor`]
    pub const SENSOR_ADC: AdcChannel = AdcChannel::Adc0;

    /// Take the alarm's peripherals
    pub fn take(p: Peripherals) -> Self {
        Self {
            uart: p.UART0,
            uart_tx: p.PIN_0,
            adc: p.ADC,
            sensor: p.PIN_26,
            status_led: p.PIN_25,
            buzzer: p.PIN_15,
        }
    }
}
