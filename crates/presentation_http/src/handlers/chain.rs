//! Recursive chain handler

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Compose a chain of self-directed requests of the given depth
///
/// The next hop targets this request's own Host so the chain follows
/// whatever address the client reached us on; requests without a usable
/// Host header fall back to the configured bind address.
#[instrument(skip(state, headers))]
pub async fn chain(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(depth): Path<i64>,
) -> Result<String, ApiError> {
    let authority = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| state.config.server.bind_address(), ToString::to_string);
    let base_url = format!("http://{authority}");

    let body = state.chain_propagator.chain(depth, &base_url).await?;
    Ok(body)
}
