//! Resource pressure simulator - CPU burn and cumulative memory pressure
//!
//! Two independent sub-behaviors grouped by domain: a busy-loop that fully
//! occupies one execution unit, and a leak that accumulates in the
//! process-wide [`MemoryLedger`].

use std::time::Instant;

use domain::{BurnSeconds, Megabytes};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ledger::MemoryLedger};

/// Result of one CPU burn
#[derive(Debug, Clone, Copy)]
pub struct BurnReport {
    /// Requested burn window
    pub seconds: BurnSeconds,
    /// Iterations completed before the deadline
    pub iterations: u64,
}

/// Result of one simulated allocation
#[derive(Debug, Clone, Copy)]
pub struct AllocationReport {
    /// Requested allocation size
    pub size: Megabytes,
    /// Ledger length after this append
    pub total_allocations: usize,
}

/// Service simulating CPU and memory pressure
#[derive(Debug, Clone)]
pub struct ResourcePressure {
    ledger: MemoryLedger,
}

impl ResourcePressure {
    /// Create a new pressure simulator over the given ledger
    #[must_use]
    pub fn new(ledger: MemoryLedger) -> Self {
        Self { ledger }
    }

    /// Busy-loop one execution unit until the wall-clock deadline
    ///
    /// Runs on a dedicated blocking thread so the deliberate spin cannot
    /// starve the async workers serving other requests. There is no
    /// cooperative yielding inside the loop.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `seconds` is outside 0-10.
    #[instrument(skip(self))]
    pub async fn burn_cpu(&self, seconds: f64) -> Result<BurnReport, ApplicationError> {
        let burn = BurnSeconds::new(seconds)?;

        let iterations = tokio::task::spawn_blocking(move || {
            let deadline = Instant::now() + burn.as_duration();
            let mut counter: u64 = 0;
            while Instant::now() < deadline {
                counter += 1;
            }
            counter
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        debug!(seconds = burn.value(), iterations, "CPU burn finished");
        Ok(BurnReport {
            seconds: burn,
            iterations,
        })
    }

    /// Append one buffer of the requested size to the process-wide ledger
    ///
    /// The ledger never shrinks; accumulation across requests is the
    /// simulated defect.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `mb` is outside 0-100; nothing is
    /// allocated in that case.
    #[instrument(skip(self))]
    pub fn allocate(&self, mb: i64) -> Result<AllocationReport, ApplicationError> {
        let size = Megabytes::new(mb)?;
        let total_allocations = self.ledger.append(size.as_bytes());
        debug!(size = %size, total_allocations, "Recorded simulated leak");
        Ok(AllocationReport {
            size,
            total_allocations,
        })
    }
}
