//! Port definitions for the simulation engine
//!
//! Ports are interfaces that define how the engine interacts with the
//! outside world. Adapters in the infrastructure layer implement them.

mod chain_client;
mod random_source;

pub use chain_client::ChainClientPort;
pub use random_source::RandomSource;
