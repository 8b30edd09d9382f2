//! HTTP adapter for the chain client port

use std::time::Duration;

use application::{ApplicationError, ports::ChainClientPort};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ChainConfig;

/// `ChainClientPort` backed by a reqwest client with an explicit timeout
///
/// The original chain design carried no timeout on the self-directed hop;
/// the configured request timeout bounds how long an outer request can
/// stay pinned on a stuck inner hop.
#[derive(Debug, Clone)]
pub struct HttpChainClient {
    client: Client,
}

impl HttpChainClient {
    /// Create a new chain client with the configured hop timeout
    pub fn new(config: &ChainConfig) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ChainClientPort for HttpChainClient {
    async fn fetch(&self, url: &str) -> Result<String, ApplicationError> {
        debug!(url, "Fetching chain hop");

        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = %status, "Chain hop returned failure status");
            return Err(ApplicationError::Dependency(format!(
                "inner hop returned {status}"
            )));
        }

        response.text().await.map_err(classify)
    }
}

fn classify(err: reqwest::Error) -> ApplicationError {
    if err.is_timeout() {
        ApplicationError::Dependency("inner hop timed out".to_string())
    } else if err.is_connect() {
        ApplicationError::Dependency(format!("connection failed: {err}"))
    } else {
        ApplicationError::Dependency(err.to_string())
    }
}
