//! Explicit status code handler

use application::StatusSelector;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::ApiError;

/// Return exactly the requested status code
#[instrument]
pub async fn explicit_status(Path(code): Path<i64>) -> Result<Response, ApiError> {
    let (code, body) = StatusSelector::explicit_status(code)?;
    let status = StatusCode::from_u16(code.value())
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((status, body).into_response())
}
