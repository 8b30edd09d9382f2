//! Chain client port - Interface for the self-directed chain hop

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for the outbound HTTP hop of a chained request
///
/// The chain propagator calls back into the service's own `/chain/{d-1}`
/// endpoint through this port, so the engine stays ignorant of the HTTP
/// client and tests can script hop responses.
#[async_trait]
pub trait ChainClientPort: Send + Sync {
    /// GET the URL and return the full response body
    ///
    /// A connection error, timeout, or non-success status is a
    /// `Dependency` failure; the caller does not retry.
    async fn fetch(&self, url: &str) -> Result<String, ApplicationError>;
}
