//! Failure injector - Probabilistic success/failure decision

use std::fmt;
use std::sync::Arc;

use domain::FailureRate;
use tracing::debug;

use crate::{error::ApplicationError, ports::RandomSource};

/// Outcome of one failure evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureVerdict {
    /// The request passes through
    Succeeded,
    /// A failure is injected
    Failed,
}

impl FailureVerdict {
    /// Whether a failure was injected
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Service injecting failures at a requested percentage rate
pub struct FailureInjector {
    random: Arc<dyn RandomSource>,
}

impl fmt::Debug for FailureInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureInjector").finish_non_exhaustive()
    }
}

impl FailureInjector {
    /// Create a new failure injector
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Evaluate one request against the requested failure rate
    ///
    /// Draws a uniform integer in [0, 100) and injects a failure iff the
    /// draw lands below the rate, so rate 0 never fails and rate 100
    /// always fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `rate` is outside 0-100.
    pub fn evaluate(&self, rate: i64) -> Result<FailureVerdict, ApplicationError> {
        let rate = FailureRate::new(rate)?;
        #[allow(clippy::cast_possible_truncation)]
        let draw = self.random.draw(100) as u8;
        let verdict = if rate.covers(draw) {
            FailureVerdict::Failed
        } else {
            FailureVerdict::Succeeded
        };
        debug!(rate = %rate, draw, ?verdict, "Evaluated failure rate");
        Ok(verdict)
    }
}
