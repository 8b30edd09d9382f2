//! Faultline HTTP presentation layer
//!
//! This crate provides the HTTP surface for the fault-injection
//! simulators: one GET endpoint per simulator, parameterized by the
//! request path.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
