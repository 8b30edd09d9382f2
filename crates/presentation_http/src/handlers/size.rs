//! Exact-size response handler

use axum::{
    extract::{Path, State},
    http::header::{CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Return a filler body of exactly `kb x 1024` bytes
#[instrument(skip(state))]
pub async fn size(
    State(state): State<AppState>,
    Path(kb): Path<i64>,
) -> Result<Response, ApiError> {
    let body = state.response_size.generate(kb)?;
    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
        body,
    )
        .into_response())
}
