//! Chain propagator - Recursive self-directed request chains
//!
//! `/chain/{depth}` calls back into the service's own `/chain/{depth-1}`,
//! so a chain of depth d is an external network round-trip disguised as
//! recursion. Depth strictly decreases and is bounded below by zero, so a
//! chain terminates in at most d hops.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::ChainDepth;
use tracing::instrument;

use crate::{error::ApplicationError, ports::ChainClientPort};

/// Fixed per-hop processing pause
const HOP_DELAY: Duration = Duration::from_millis(100);

/// Service composing recursive request chains
pub struct ChainPropagator {
    client: Arc<dyn ChainClientPort>,
    hop_delay: Duration,
}

impl fmt::Debug for ChainPropagator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainPropagator")
            .field("hop_delay", &self.hop_delay)
            .finish_non_exhaustive()
    }
}

impl ChainPropagator {
    /// Create a new chain propagator
    pub fn new(client: Arc<dyn ChainClientPort>) -> Self {
        Self {
            client,
            hop_delay: HOP_DELAY,
        }
    }

    /// Override the per-hop pause (tests)
    #[must_use]
    pub const fn with_hop_delay(mut self, hop_delay: Duration) -> Self {
        self.hop_delay = hop_delay;
        self
    }

    /// Compose the chain body for the requested depth
    ///
    /// Depth 0 returns `"Chain 0: "` immediately with no outbound call.
    /// Deeper chains pause for the fixed hop delay, fetch
    /// `{base_url}/chain/{depth-1}` through the chain client port, and
    /// append the inner body to this hop's label.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `depth` is outside 0-5, or a
    /// `Dependency` error if the outbound hop fails. A failed hop fails
    /// the whole chain; there is no retry.
    #[instrument(skip(self, base_url))]
    pub async fn chain(&self, depth: i64, base_url: &str) -> Result<String, ApplicationError> {
        let depth = ChainDepth::new(depth)?;
        let mut response = format!("Chain {depth}: ");

        if let Some(next) = depth.next() {
            tokio::time::sleep(self.hop_delay).await;
            let url = format!("{base_url}/chain/{next}");
            let inner = self.client.fetch(&url).await?;
            response.push_str(&inner);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Instant;

    use async_trait::async_trait;

    use super::*;

    /// Chain client double that answers every hop with a canned body and
    /// records the URLs it was asked for
    struct RecordingClient {
        urls: Mutex<Vec<String>>,
        body: String,
    }

    impl RecordingClient {
        fn new(body: &str) -> Arc<Self> {
            Arc::new(Self {
                urls: Mutex::new(Vec::new()),
                body: body.to_string(),
            })
        }
    }

    #[async_trait]
    impl ChainClientPort for RecordingClient {
        async fn fetch(&self, url: &str) -> Result<String, ApplicationError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl ChainClientPort for FailingClient {
        async fn fetch(&self, _url: &str) -> Result<String, ApplicationError> {
            Err(ApplicationError::Dependency("connection refused".to_string()))
        }
    }

    fn propagator(client: Arc<dyn ChainClientPort>) -> ChainPropagator {
        ChainPropagator::new(client).with_hop_delay(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn depth_zero_is_terminal_with_no_outbound_call() {
        let client = RecordingClient::new("unused");
        let body = propagator(client.clone()).chain(0, "http://127.0.0.1:3000").await.unwrap();
        assert_eq!(body, "Chain 0: ");
        assert!(client.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deeper_chain_fetches_the_next_hop() {
        let client = RecordingClient::new("Chain 2: Chain 1: Chain 0: ");
        let body = propagator(client.clone()).chain(3, "http://127.0.0.1:3000").await.unwrap();
        assert_eq!(body, "Chain 3: Chain 2: Chain 1: Chain 0: ");
        assert_eq!(
            *client.urls.lock().unwrap(),
            vec!["http://127.0.0.1:3000/chain/2".to_string()]
        );
    }

    #[tokio::test]
    async fn hop_pauses_before_the_outbound_call() {
        let client = RecordingClient::new("Chain 0: ");
        let propagator =
            ChainPropagator::new(client).with_hop_delay(Duration::from_millis(30));
        let start = Instant::now();
        propagator.chain(1, "http://127.0.0.1:3000").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn failed_hop_fails_the_whole_chain() {
        let result = propagator(Arc::new(FailingClient)).chain(2, "http://127.0.0.1:3000").await;
        assert!(matches!(result, Err(ApplicationError::Dependency(_))));
    }

    #[tokio::test]
    async fn invalid_depth_rejected_without_calling_out() {
        let client = RecordingClient::new("unused");
        assert!(propagator(client.clone()).chain(6, "http://x").await.is_err());
        assert!(propagator(client.clone()).chain(-1, "http://x").await.is_err());
        assert!(client.urls.lock().unwrap().is_empty());
    }
}
