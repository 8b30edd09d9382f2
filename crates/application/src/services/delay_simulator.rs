//! Delay simulator - Bounded suspension of one request

use domain::DelaySeconds;
use tracing::instrument;

use crate::error::ApplicationError;

/// Service suspending a single request for a bounded duration
///
/// The sleep suspends only the calling task; other in-flight requests are
/// unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaySimulator;

impl DelaySimulator {
    /// Create a new delay simulator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Suspend the calling task for exactly the requested duration
    ///
    /// # Errors
    ///
    /// Returns a validation error if `seconds` is outside 0-30; no time
    /// passes in that case.
    #[instrument(skip(self))]
    pub async fn wait(&self, seconds: f64) -> Result<DelaySeconds, ApplicationError> {
        let delay = DelaySeconds::new(seconds)?;
        tokio::time::sleep(delay.as_duration()).await;
        Ok(delay)
    }
}
