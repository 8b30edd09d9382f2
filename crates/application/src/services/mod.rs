//! Simulation services - One per simulator family

mod chain_propagator;
mod delay_simulator;
mod failure_injector;
mod resource_pressure;
mod response_size;
mod status_selector;
mod stream_emitter;

pub use chain_propagator::ChainPropagator;
pub use delay_simulator::DelaySimulator;
pub use failure_injector::{FailureInjector, FailureVerdict};
pub use resource_pressure::{AllocationReport, BurnReport, ResourcePressure};
pub use response_size::ResponseSize;
pub use status_selector::{RANDOM_STATUS_SET, StatusSelector};
pub use stream_emitter::StreamEmitter;
