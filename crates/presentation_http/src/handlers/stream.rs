//! Timed streaming handler

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{Path, State},
    http::header::{CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Stream `Chunk {i}` lines at the fixed cadence over the requested window
///
/// Each chunk is flushed as it is produced, so the client observes output
/// incrementally. If the client disconnects, the body stream is dropped
/// and emission stops early without error.
#[instrument(skip(state))]
pub async fn stream(
    State(state): State<AppState>,
    Path(seconds): Path<f64>,
) -> Result<Response, ApiError> {
    let chunks = state.stream_emitter.stream(seconds)?;
    let body = Body::from_stream(chunks.map(Ok::<_, Infallible>));

    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
        body,
    )
        .into_response())
}
