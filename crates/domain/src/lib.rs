//! Domain layer for faultline
//!
//! Contains the validated request parameters for every simulation endpoint
//! and the domain errors. This layer has no I/O and no async.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
