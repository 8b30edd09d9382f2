//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Documentation landing page
        .route("/", get(handlers::index::index))
        // Header introspection
        .route("/headers", get(handlers::headers::headers))
        // Fault-injection endpoints
        .route("/status/{code}", get(handlers::status::explicit_status))
        .route("/flaky/{rate}", get(handlers::flaky::flaky))
        .route("/delay/{seconds}", get(handlers::delay::delay))
        .route("/memory/{mb}", get(handlers::pressure::memory))
        .route("/cpu/{seconds}", get(handlers::pressure::cpu))
        .route("/chain/{depth}", get(handlers::chain::chain))
        .route("/size/{kb}", get(handlers::size::size))
        .route("/stream/{seconds}", get(handlers::stream::stream))
        // Attach state
        .with_state(state)
}
