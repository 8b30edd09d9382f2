//! Resource pressure handlers - CPU burn and memory accumulation

use axum::extract::{Path, State};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Append one simulated leak to the process-wide ledger
#[instrument(skip(state))]
pub async fn memory(
    State(state): State<AppState>,
    Path(mb): Path<i64>,
) -> Result<String, ApiError> {
    let report = state.resource_pressure.allocate(mb)?;
    Ok(format!(
        "Allocated {}MB. Total allocations: {}",
        report.size.value(),
        report.total_allocations
    ))
}

/// Fully occupy one execution unit for the requested duration
#[instrument(skip(state))]
pub async fn cpu(
    State(state): State<AppState>,
    Path(seconds): Path<f64>,
) -> Result<String, ApiError> {
    let report = state.resource_pressure.burn_cpu(seconds).await?;
    Ok(format!(
        "Performed {} iterations in {} seconds",
        report.iterations, report.seconds
    ))
}
