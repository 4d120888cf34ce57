//! Concentration sensor trait

use crate::sample::Sample;

/// Errors that can occur while reading the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Conversion never reported completion within the poll limit
    ConversionTimeout,
    /// Converter returned a value outside its declared resolution
    OutOfRange,
}

/// Source of concentration samples
///
/// Implementations trigger a conversion and wait (bounded) for it to
/// complete. Takes `&mut self` because conversions mutate peripheral state.
pub trait SampleSource {
    /// Read one normalized sample
    fn read(&mut self) -> Result<Sample, SensorError>;
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    fn read(&mut self) -> Result<Sample, SensorError> {
        T::read(self)
    }
}
