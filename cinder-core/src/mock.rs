//! Test doubles for the collaborator and HAL traits

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use cinder_hal::{Napper, OutputPin};

use crate::sample::{format_report_line, Sample};
use crate::traits::{DiagnosticReporter, ReportError, SampleSource, SensorError};

pub fn s(raw: u16) -> Sample {
    Sample::saturating(raw)
}

/// Sensor replaying a fixed script, then repeating its last entry
pub struct ScriptedSensor {
    script: VecDeque<Result<Sample, SensorError>>,
    last: Option<Result<Sample, SensorError>>,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(samples: &[u16]) -> Self {
        Self::from_results(samples.iter().map(|&raw| Ok(s(raw))))
    }

    pub fn from_results(script: impl IntoIterator<Item = Result<Sample, SensorError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: None,
            reads: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SampleSource for ScriptedSensor {
    fn read(&mut self) -> Result<Sample, SensorError> {
        self.reads += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = Some(next);
        }
        self.last.unwrap_or(Err(SensorError::ConversionTimeout))
    }
}

/// Reporter capturing every line it is asked to write
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Vec<String>,
    pub fail: bool,
}

impl RecordingReporter {
    pub fn failing() -> Self {
        Self {
            lines: Vec::new(),
            fail: true,
        }
    }
}

impl DiagnosticReporter for RecordingReporter {
    fn report(&mut self, sample: Sample) -> Result<(), ReportError> {
        if self.fail {
            return Err(ReportError::SinkUnavailable);
        }
        self.lines.push(String::from(format_report_line(sample).as_str()));
        Ok(())
    }
}

/// Output pin recording every level it is driven to
#[derive(Default)]
pub struct RecordingPin {
    pub high: bool,
    pub history: Vec<bool>,
}

impl RecordingPin {
    /// Number of level changes seen
    pub fn transitions(&self) -> usize {
        let mut previous = false;
        let mut count = 0;
        for &level in &self.history {
            if level != previous {
                count += 1;
            }
            previous = level;
        }
        count
    }
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) {
        self.high = true;
        self.history.push(true);
    }

    fn set_low(&mut self) {
        self.high = false;
        self.history.push(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Napper that returns immediately and counts naps
pub struct CountingNapper {
    pub naps: u32,
    pub period_ms: u32,
}

impl CountingNapper {
    pub fn with_period(period_ms: u32) -> Self {
        Self { naps: 0, period_ms }
    }
}

impl Default for CountingNapper {
    fn default() -> Self {
        Self::with_period(4000)
    }
}

impl Napper for CountingNapper {
    async fn nap(&mut self) {
        self.naps += 1;
    }

    fn nap_period_ms(&self) -> u32 {
        self.period_ms
    }
}

/// Async delay recording requested millisecond pauses
#[derive(Default)]
pub struct RecordingDelay {
    pub ms_calls: Vec<u32>,
    pub total_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.ms_calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Blocking delay counting microsecond waits
#[derive(Default)]
pub struct TickDelay {
    pub us_calls: Vec<u32>,
}

impl embedded_hal::delay::DelayNs for TickDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_us(&mut self, us: u32) {
        self.us_calls.push(us);
    }
}
