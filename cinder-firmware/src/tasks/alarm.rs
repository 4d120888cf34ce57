//! Alarm control task
//!
//! Owns the controller and runs it forever. Between samples the executor
//! has nothing else to do, so every nap parks the core until the timer
//! interrupt.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::{Blocking, UartTx};
use embassy_time::Delay;

use cinder_core::AlarmController;
use cinder_drivers::output::HalOutput;
use cinder_drivers::report::{IoUart, SerialReporter};
use cinder_drivers::sensor::AdcSensor;
use cinder_drivers::sleep::TimerNapper;
use cinder_hal_rp2040::Rp2040Adc;

/// Controller wired to the RP2040 peripherals
pub type Controller = AlarmController<
    AdcSensor<Rp2040Adc<'static>>,
    SerialReporter<IoUart<UartTx<'static, Blocking>>>,
    HalOutput<Output<'static>>,
    TimerNapper<Delay>,
    HalOutput<Output<'static>>,
    Delay,
    Delay,
>;

/// Alarm task - calibrates, duty-cycles and, once smoke is seen, alarms
#[embassy_executor::task]
pub async fn alarm_task(mut controller: Controller) -> ! {
    info!("Alarm task started, calibrating");

    controller.calibrate().await;
    info!(
        "Calibration done after {} attempts",
        controller.diagnostics().calibration_attempts
    );

    controller.run().await
}
