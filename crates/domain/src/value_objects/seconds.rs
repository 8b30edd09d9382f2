//! Duration value objects
//!
//! Three bounded wall-clock durations, one per timing endpoint. All are
//! parsed from a float path parameter; NaN fails the range check like any
//! other out-of-range value.

use std::fmt;
use std::time::Duration;

use crate::errors::DomainError;

const fn in_range(value: f64, max: f64) -> bool {
    // NaN fails both comparisons
    value >= 0.0 && value <= max
}

/// How long `/delay/{seconds}` suspends the request (0-30 s)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DelaySeconds(f64);

impl DelaySeconds {
    /// Maximum valid delay in seconds
    pub const MAX: f64 = 30.0;

    /// Create a new validated delay duration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DelayOutOfRange` if the value is outside
    /// 0-30 or NaN.
    pub const fn new(value: f64) -> Result<Self, DomainError> {
        if in_range(value, Self::MAX) {
            Ok(Self(value))
        } else {
            Err(DomainError::DelayOutOfRange(value))
        }
    }

    /// Get the delay in seconds
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The delay as a `Duration`
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl fmt::Display for DelaySeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How long `/cpu/{seconds}` busy-loops one execution unit (0-10 s)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BurnSeconds(f64);

impl BurnSeconds {
    /// Maximum valid burn duration in seconds
    pub const MAX: f64 = 10.0;

    /// Create a new validated burn duration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CpuTimeOutOfRange` if the value is outside
    /// 0-10 or NaN.
    pub const fn new(value: f64) -> Result<Self, DomainError> {
        if in_range(value, Self::MAX) {
            Ok(Self(value))
        } else {
            Err(DomainError::CpuTimeOutOfRange(value))
        }
    }

    /// Get the burn duration in seconds
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The burn window as a `Duration`
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl fmt::Display for BurnSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The wall-clock window of `/stream/{seconds}` (0-30 s)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StreamSeconds(f64);

impl StreamSeconds {
    /// Maximum valid stream window in seconds
    pub const MAX: f64 = 30.0;

    /// Create a new validated stream window
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StreamTimeOutOfRange` if the value is outside
    /// 0-30 or NaN.
    pub const fn new(value: f64) -> Result<Self, DomainError> {
        if in_range(value, Self::MAX) {
            Ok(Self(value))
        } else {
            Err(DomainError::StreamTimeOutOfRange(value))
        }
    }

    /// Get the window in seconds
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Number of chunks emitted over the window: floor(seconds x 2)
    ///
    /// Two chunks per second at a fixed 0.5 s cadence. Total emission time
    /// is `chunk_count() x 0.5 s`, not `seconds` exactly; the floor
    /// truncation is part of the contract.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn chunk_count(self) -> u64 {
        (self.0 * 2.0).floor() as u64
    }
}

impl fmt::Display for StreamSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn delay_accepts_range_boundaries() {
        assert!(DelaySeconds::new(0.0).is_ok());
        assert!(DelaySeconds::new(30.0).is_ok());
    }

    #[test]
    fn delay_rejects_out_of_range() {
        assert!(DelaySeconds::new(-0.1).is_err());
        assert!(DelaySeconds::new(30.1).is_err());
        assert!(DelaySeconds::new(f64::NAN).is_err());
    }

    #[test]
    fn delay_converts_to_duration() {
        let delay = DelaySeconds::new(2.5).unwrap();
        assert_eq!(delay.as_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn delay_display_matches_float_display() {
        assert_eq!(format!("{}", DelaySeconds::new(5.0).unwrap()), "5");
        assert_eq!(format!("{}", DelaySeconds::new(2.5).unwrap()), "2.5");
    }

    #[test]
    fn burn_accepts_range_boundaries() {
        assert!(BurnSeconds::new(0.0).is_ok());
        assert!(BurnSeconds::new(10.0).is_ok());
    }

    #[test]
    fn burn_rejects_out_of_range() {
        assert!(BurnSeconds::new(10.5).is_err());
        assert!(BurnSeconds::new(-1.0).is_err());
        assert!(BurnSeconds::new(f64::NAN).is_err());
    }

    #[test]
    fn stream_accepts_range_boundaries() {
        assert!(StreamSeconds::new(0.0).is_ok());
        assert!(StreamSeconds::new(30.0).is_ok());
    }

    #[test]
    fn stream_rejects_out_of_range() {
        assert!(StreamSeconds::new(-0.5).is_err());
        assert!(StreamSeconds::new(31.0).is_err());
        assert!(StreamSeconds::new(f64::NAN).is_err());
    }

    #[test]
    fn chunk_count_floors() {
        assert_eq!(StreamSeconds::new(0.0).unwrap().chunk_count(), 0);
        assert_eq!(StreamSeconds::new(0.4).unwrap().chunk_count(), 0);
        assert_eq!(StreamSeconds::new(0.5).unwrap().chunk_count(), 1);
        assert_eq!(StreamSeconds::new(1.0).unwrap().chunk_count(), 2);
        assert_eq!(StreamSeconds::new(2.7).unwrap().chunk_count(), 5);
        assert_eq!(StreamSeconds::new(30.0).unwrap().chunk_count(), 60);
    }

    proptest! {
        #[test]
        fn delay_in_range_always_constructs(value in 0.0f64..=30.0) {
            prop_assert!(DelaySeconds::new(value).is_ok());
        }

        #[test]
        fn delay_above_range_always_rejects(value in 30.0f64..1e9) {
            prop_assume!(value > 30.0);
            prop_assert!(DelaySeconds::new(value).is_err());
        }

        #[test]
        fn chunk_count_never_exceeds_twice_the_window(value in 0.0f64..=30.0) {
            let chunks = StreamSeconds::new(value).unwrap().chunk_count();
            prop_assert!((chunks as f64) <= value * 2.0);
            prop_assert!((chunks as f64) > value * 2.0 - 1.0);
        }
    }
}
