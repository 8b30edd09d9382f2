//! Probabilistic failure handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Succeed or fail according to the requested percentage rate
#[instrument(skip(state))]
pub async fn flaky(
    State(state): State<AppState>,
    Path(rate): Path<i64>,
) -> Result<Response, ApiError> {
    let verdict = state.failure_injector.evaluate(rate)?;

    let response = if verdict.is_failure() {
        (StatusCode::INTERNAL_SERVER_ERROR, "Simulated failure")
    } else {
        (StatusCode::OK, "Success!")
    };

    Ok(response.into_response())
}
