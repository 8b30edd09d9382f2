//! Port adapters

mod http_chain_client;
mod thread_rng_source;

pub use http_chain_client::HttpChainClient;
pub use thread_rng_source::ThreadRngSource;
