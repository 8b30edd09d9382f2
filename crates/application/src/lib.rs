//! Application layer - The fault-injection simulation engine
//!
//! Contains one service per simulator family, the process-wide memory
//! ledger, and the port definitions the engine needs from the outside
//! world. Infrastructure adapters implement the ports.

pub mod error;
pub mod ledger;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ledger::MemoryLedger;
pub use ports::*;
pub use services::*;
