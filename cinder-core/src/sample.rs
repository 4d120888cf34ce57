//! Concentration samples
//!
//! A sample is one normalized gas-concentration reading in the 10-bit
//! sensor domain (0-1023). Samples are ephemeral: each is read, used once
//! and dropped.

use core::fmt::{self, Write};

use heapless::String;

/// Number of significant bits in a sample
pub const SAMPLE_BITS: u8 = 10;

/// One report line: up to four digits plus `\r\n`
pub const REPORT_LINE_LEN: usize = 6;

/// Normalized concentration reading (0..=1023)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample(u16);

impl Sample {
    /// Largest representable sample
    pub const MAX: Sample = Sample((1 << SAMPLE_BITS) - 1);

    /// Create a sample, rejecting values outside the 10-bit domain
    pub const fn new(raw: u16) -> Option<Self> {
        if raw <= Self::MAX.0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Create a sample, saturating at [`Sample::MAX`]
    pub const fn saturating(raw: u16) -> Self {
        if raw > Self::MAX.0 {
            Self::MAX
        } else {
            Self(raw)
        }
    }

    /// Raw value
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<Sample> for u16 {
    fn from(sample: Sample) -> Self {
        sample.0
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format a sample as one diagnostic line: `<decimal>\r\n`
///
/// This is the wire format existing log tooling parses, so it must stay
/// byte-for-byte stable.
pub fn format_report_line(sample: Sample) -> String<REPORT_LINE_LEN> {
    let mut line = String::new();
    // Four digits and CR LF always fit in REPORT_LINE_LEN.
    let _ = write!(line, "{}\r\n", sample.value());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_bounds() {
        assert_eq!(Sample::new(0).map(Sample::value), Some(0));
        assert_eq!(Sample::new(1023).map(Sample::value), Some(1023));
        assert_eq!(Sample::new(1024), None);
        assert_eq!(Sample::saturating(4095), Sample::MAX);
    }

    #[test]
    fn test_report_line_format() {
        assert_eq!(format_report_line(Sample::saturating(0)).as_str(), "0\r\n");
        assert_eq!(format_report_line(Sample::saturating(390)).as_str(), "390\r\n");
        assert_eq!(format_report_line(Sample::MAX).as_str(), "1023\r\n");
    }

    #[test]
    fn test_ordering_matches_raw_value() {
        assert!(Sample::saturating(399) < Sample::saturating(400));
        assert!(Sample::saturating(600) >= Sample::saturating(600));
    }
}
