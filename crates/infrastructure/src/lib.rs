//! Infrastructure layer - Adapters for the simulation engine
//!
//! Implements the ports defined in the application layer and owns the
//! process configuration.

pub mod adapters;
pub mod config;

pub use adapters::{HttpChainClient, ThreadRngSource};
pub use config::{AppConfig, ChainConfig, ServerConfig};
