//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the simulation engine
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request parameter outside its documented range
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Outbound chain call failed (connection error, timeout, or a
    /// non-success inner status)
    #[error("Chain dependency failed: {0}")]
    Dependency(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this error is the caller's fault (a 400-class rejection)
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError = DomainError::ChainDepthOutOfRange(7).into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Chain depth must be between 0-5");
    }

    #[test]
    fn dependency_error_message() {
        let err = ApplicationError::Dependency("connection refused".to_string());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Chain dependency failed: connection refused");
    }

    #[test]
    fn internal_error_message() {
        let err = ApplicationError::Internal("join failed".to_string());
        assert_eq!(err.to_string(), "Internal error: join failed");
    }
}
