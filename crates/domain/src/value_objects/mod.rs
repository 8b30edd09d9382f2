//! Validated request parameters
//!
//! One newtype per path parameter. Construction is fallible and checks the
//! endpoint's inclusive range, so an out-of-range request is rejected
//! before any simulator runs.

mod chain_depth;
mod explicit_code;
mod failure_rate;
mod payload;
mod seconds;

pub use chain_depth::ChainDepth;
pub use explicit_code::ExplicitCode;
pub use failure_rate::FailureRate;
pub use payload::{Kilobytes, Megabytes};
pub use seconds::{BurnSeconds, DelaySeconds, StreamSeconds};
