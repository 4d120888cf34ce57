//! Cinder - Low-Power Smoke Alarm Firmware
//!
//! Main firmware binary for an RP2040 board with an MQ-series gas sensor,
//! a status LED and a buzzer. Samples once a minute, reports each reading
//! on UART0 at 9600 baud, and latches into a tone-burst alarm once smoke
//! is confirmed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::uart::{self, UartTx};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use cinder_core::config::AlarmConfig;
use cinder_core::{AlarmController, Peripherals};
use cinder_drivers::output::HalOutput;
use cinder_drivers::report::{IoUart, SerialReporter};
use cinder_drivers::sensor::{AdcSensor, AdcSensorConfig};
use cinder_drivers::sleep::TimerNapper;
use cinder_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use cinder_hal_rp2040::board::Board;
use cinder_hal_rp2040::Rp2040Adc;

mod tasks;

/// Compiled-in configuration (the device is not reconfigurable)
const CONFIG: AlarmConfig = AlarmConfig::DEFAULT;

const _: () = assert!(CONFIG.is_valid());

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Cinder smoke alarm starting...");

    // Initialize RP2040 peripherals
    let board = Board::take(embassy_rp::init(Default::default()));
    info!("Peripherals initialized");

    // Diagnostic serial stream: UART0 TX only
    let uart_config = to_rp_uart_config(UartConfig::default());
    let tx = UartTx::new_blocking(board.uart, board.uart_tx, uart_config);
    let reporter = SerialReporter::new(IoUart::new(tx));
    info!(
        "Diagnostic UART on GPIO{} at {} baud",
        Board::UART_TX_GPIO,
        UartConfig::default().baudrate
    );

    // Gas sensor on ADC0
    let adc = Adc::new_blocking(board.adc, AdcConfig::default());
    let channel = Channel::new_pin(board.sensor, Pull::None);
    let sensor = AdcSensor::new(Rp2040Adc::new(adc, channel), AdcSensorConfig::default());
    info!("Sensor on {} (GPIO{})", Board::SENSOR_ADC, Board::SENSOR_GPIO);

    // Status LED and buzzer
    let status_led = HalOutput::active_high(Output::new(board.status_led, Level::Low));
    let buzzer = HalOutput::active_high(Output::new(board.buzzer, Level::Low));
    info!(
        "Status LED on GPIO{}, buzzer on GPIO{}",
        Board::STATUS_LED_GPIO,
        Board::BUZZER_GPIO
    );

    let napper = TimerNapper::new(Delay, CONFIG.duty_cycle.nap_period_ms);

    let controller = unwrap!(AlarmController::new(
        CONFIG,
        Peripherals {
            sensor,
            reporter,
            status_led,
            napper,
            buzzer,
            tone_delay: Delay,
            delay: Delay,
        },
    ));

    info!(
        "Thresholds: clean < {}, alarm >= {}; tone {} Hz",
        CONFIG.thresholds.clean_air_ceiling,
        CONFIG.thresholds.alarm_floor,
        CONFIG.tone.frequency_hz()
    );

    spawner.spawn(tasks::alarm_task(controller)).unwrap();

    info!("Alarm task spawned, firmware running");
}

/// Map the board-agnostic UART settings onto embassy-rp's
fn to_rp_uart_config(config: UartConfig) -> uart::Config {
    let mut rp = uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        // The RP2040 UART has no 9-bit frames
        DataBits::Eight | DataBits::Nine => uart::DataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    rp
}
