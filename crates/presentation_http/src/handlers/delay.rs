//! Bounded delay handler

use axum::extract::{Path, State};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Suspend this request for the requested duration, then confirm it
#[instrument(skip(state))]
pub async fn delay(
    State(state): State<AppState>,
    Path(seconds): Path<f64>,
) -> Result<String, ApiError> {
    let delay = state.delay_simulator.wait(seconds).await?;
    Ok(format!("Waited {delay} seconds"))
}
