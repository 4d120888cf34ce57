//! Alarm controller implementation
//!
//! The controller holds all device state explicitly: the current mode, the
//! calibration gate, the sleep budget and the diagnostic counters. Each
//! call to [`AlarmController::step`] performs the unit of work for the
//! current mode:
//!
//! - Calibrating: one calibration attempt
//! - Armed: read -> report -> sleep cycle -> fresh read -> threshold check
//! - Alarming: one tone burst and rest
//!
//! The armed cycle reads the sensor twice. The first read is reported,
//! the second (taken after the sleep) decides. A report therefore always
//! shows the reading from before the nap, never the one that tripped the
//! alarm; [`CycleOutcome`] carries both so the lag stays visible.
//!
//! Once alarming, the buzzer owns the device: no reads, no reports, and
//! no way back without a power cycle.

use cinder_hal::{Napper, OutputPin};
use embedded_hal::delay::DelayNs as ToneDelay;
use embedded_hal_async::delay::DelayNs;

use crate::buzzer::BuzzerDriver;
use crate::calibration::{CalibrationGate, CalibrationStatus};
use crate::config::{AlarmConfig, ConfigError};
use crate::duty_cycle::SleepController;
use crate::sample::Sample;
use crate::state::{Event, Mode};
use crate::traits::{DiagnosticReporter, SampleSource, SensorError};

use super::Diagnostics;

/// Hardware handed to the controller
pub struct Peripherals<S, R, L, N, B, T, D> {
    /// Concentration sensor
    pub sensor: S,
    /// Diagnostic line sink
    pub reporter: R,
    /// Status indicator, lit while calibrating
    pub status_led: L,
    /// Periodic-wake napper for the duty cycle
    pub napper: N,
    /// Buzzer output
    pub buzzer: B,
    /// Blocking delay pacing the tone
    pub tone_delay: T,
    /// Async delay for retries, settling and rests
    pub delay: D,
}

/// What one armed cycle observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutcome {
    /// Pre-sleep read (the one that was reported)
    pub reported: Result<Sample, SensorError>,
    /// Post-sleep read, classified (the one that decided)
    pub decision: Event,
    /// Naps taken
    pub naps: u8,
    /// Mode after the cycle
    pub mode: Mode,
}

/// Top-level smoke alarm controller
pub struct AlarmController<S, R, L, N, B, T, D> {
    config: AlarmConfig,
    mode: Mode,
    sensor: S,
    reporter: R,
    status_led: L,
    gate: CalibrationGate,
    sleep: SleepController<N>,
    buzzer: BuzzerDriver<B, T>,
    delay: D,
    diagnostics: Diagnostics,
}

impl<S, R, L, N, B, T, D> AlarmController<S, R, L, N, B, T, D>
where
    S: SampleSource,
    R: DiagnosticReporter,
    L: OutputPin,
    N: Napper,
    B: OutputPin,
    T: ToneDelay,
    D: DelayNs,
{
    /// Create a controller in the Calibrating mode
    ///
    /// Lights the status indicator and silences the buzzer.
    pub fn new(
        config: AlarmConfig,
        peripherals: Peripherals<S, R, L, N, B, T, D>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let Peripherals {
            sensor,
            reporter,
            mut status_led,
            napper,
            buzzer,
            tone_delay,
            delay,
        } = peripherals;

        status_led.set_state(Mode::Calibrating.indicator_on());

        Ok(Self {
            mode: Mode::Calibrating,
            sensor,
            reporter,
            status_led,
            gate: CalibrationGate::new(config.calibration, config.thresholds),
            sleep: SleepController::new(napper, config.duty_cycle.naps_per_cycle),
            buzzer: BuzzerDriver::new(buzzer, tone_delay, config.tone),
            delay,
            diagnostics: Diagnostics::default(),
            config,
        })
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Active configuration
    pub fn config(&self) -> &AlarmConfig {
        &self.config
    }

    /// Counters since boot
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Run one calibration attempt
    ///
    /// Does nothing and returns `None` unless calibrating.
    pub async fn calibration_attempt(&mut self) -> Option<CalibrationStatus> {
        if self.mode != Mode::Calibrating {
            return None;
        }

        let status = self
            .gate
            .attempt(
                &mut self.sensor,
                &mut self.reporter,
                &mut self.status_led,
                &mut self.delay,
                &mut self.diagnostics,
            )
            .await;

        if let CalibrationStatus::Clean(sample) = status {
            self.apply(Event::CleanAir(sample));
        }

        Some(status)
    }

    /// Block until calibration completes
    ///
    /// Returns immediately if the device is already armed or alarming.
    pub async fn calibrate(&mut self) {
        while self.mode == Mode::Calibrating {
            self.calibration_attempt().await;
        }
    }

    /// Run one armed duty cycle
    ///
    /// Does nothing and returns `None` unless armed. A failed pre-sleep read
    /// skips the report but still sleeps; a failed post-sleep read keeps the
    /// device armed for another cycle.
    pub async fn armed_cycle(&mut self) -> Option<CycleOutcome> {
        if self.mode != Mode::Armed {
            return None;
        }

        let reported = self.sensor.read();
        match reported {
            Ok(sample) => {
                self.diagnostics.record_report(self.reporter.report(sample));
                self.delay
                    .delay_ms(self.config.duty_cycle.report_settle_ms)
                    .await;
            }
            Err(e) => {
                self.diagnostics.record_sensor_fault();
                warn!("Sensor read failed before sleep: {:?}", e);
            }
        }

        let naps = self.sleep.sleep_cycle().await;

        let decision = Event::classify(self.sensor.read(), &self.config.thresholds);
        if let Event::SensorFault(e) = decision {
            self.diagnostics.record_sensor_fault();
            warn!("Sensor read failed after sleep, skipping check: {:?}", e);
        }

        self.apply(decision);
        self.diagnostics.cycles = self.diagnostics.cycles.saturating_add(1);

        Some(CycleOutcome {
            reported,
            decision,
            naps,
            mode: self.mode,
        })
    }

    /// Sound one alarm burst
    ///
    /// Does nothing and returns `false` unless alarming.
    pub async fn alarm_burst(&mut self) -> bool {
        if !self.mode.is_terminal() {
            return false;
        }

        self.buzzer.alarm_burst(&mut self.delay).await;
        self.diagnostics.alarm_bursts = self.buzzer.bursts();
        true
    }

    /// Perform the unit of work for the current mode
    ///
    /// Returns the mode after the step.
    pub async fn step(&mut self) -> Mode {
        match self.mode {
            Mode::Calibrating => {
                self.calibration_attempt().await;
            }
            Mode::Armed => {
                self.armed_cycle().await;
            }
            Mode::Alarming => {
                self.alarm_burst().await;
            }
        }
        self.mode
    }

    /// Run forever
    ///
    /// Calibrates, duty-cycles while armed and, once smoke is confirmed,
    /// sounds the alarm until power is removed.
    pub async fn run(&mut self) -> ! {
        info!("Controller running in {:?}", self.mode);
        loop {
            self.step().await;
        }
    }

    fn apply(&mut self, event: Event) {
        let next = self.mode.transition(event);
        if next == self.mode {
            return;
        }

        self.status_led.set_state(next.indicator_on());

        match next {
            Mode::Armed => {
                info!("Armed, sampling every {} ms", self.sleep.cycle_ms());
            }
            Mode::Alarming => {
                if let Some(sample) = event.sample() {
                    error!("Smoke detected ({}), alarm latched", sample.value());
                }
            }
            Mode::Calibrating => {}
        }

        self.mode = next;
    }

    /// Get access to the sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get access to the diagnostic reporter
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Get access to the status indicator
    pub fn status_led(&self) -> &L {
        &self.status_led
    }

    /// Get access to the buzzer driver
    pub fn buzzer(&self) -> &BuzzerDriver<B, T> {
        &self.buzzer
    }

    /// Get access to the sleep controller
    pub fn sleep(&self) -> &SleepController<N> {
        &self.sleep
    }
}
