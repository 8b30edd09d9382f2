//! API error handling
//!
//! The error contract is plain text: a 400 carries the violated range
//! description, a 502 carries the chain dependency failure. No JSON
//! envelope.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Parameter outside its documented range
    #[error("{0}")]
    BadRequest(String),

    /// Outbound chain dependency failed
    #[error("{0}")]
    BadGateway(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ),
        };

        (status, body).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Dependency(msg) => {
                Self::BadGateway(format!("Chain dependency failed: {msg}"))
            },
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
