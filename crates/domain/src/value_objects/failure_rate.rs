//! Failure rate value object

use std::fmt;

use crate::errors::DomainError;

/// Probability of injected failure as a percentage (0-100)
///
/// Rate 0 never fails, rate 100 always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FailureRate(u8);

impl FailureRate {
    /// Maximum valid rate
    pub const MAX: u8 = 100;

    /// Create a new validated failure rate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FailureRateOutOfRange` if the value is outside
    /// 0-100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 || value > Self::MAX as i64 {
            Err(DomainError::FailureRateOutOfRange(value))
        } else {
            Ok(Self(value as u8))
        }
    }

    /// Get the rate as a u8 percentage
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether a uniform draw in [0, 100) lands inside the failure window
    #[must_use]
    pub const fn covers(self, draw: u8) -> bool {
        draw < self.0
    }
}

impl fmt::Display for FailureRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for FailureRate {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
