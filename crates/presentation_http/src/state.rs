//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ChainPropagator, DelaySimulator, FailureInjector, MemoryLedger, ResourcePressure,
    ResponseSize, StatusSelector, StreamEmitter,
    ports::{ChainClientPort, RandomSource},
};
use infrastructure::AppConfig;

/// Shared application state
///
/// The ledger inside `resource_pressure` is the only cross-request
/// mutable state; everything else is wiring.
#[derive(Clone)]
pub struct AppState {
    /// Random/explicit status code selection
    pub status_selector: Arc<StatusSelector>,
    /// Probabilistic failure injection
    pub failure_injector: Arc<FailureInjector>,
    /// Bounded request suspension
    pub delay_simulator: DelaySimulator,
    /// CPU burn and the process-wide memory ledger
    pub resource_pressure: ResourcePressure,
    /// Recursive self-call composition
    pub chain_propagator: Arc<ChainPropagator>,
    /// Exact-size response bodies
    pub response_size: ResponseSize,
    /// Timed chunk streams
    pub stream_emitter: StreamEmitter,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire the simulation services over the given ports
    pub fn new(
        config: Arc<AppConfig>,
        random: Arc<dyn RandomSource>,
        chain_client: Arc<dyn ChainClientPort>,
    ) -> Self {
        Self {
            status_selector: Arc::new(StatusSelector::new(Arc::clone(&random))),
            failure_injector: Arc::new(FailureInjector::new(random)),
            delay_simulator: DelaySimulator::new(),
            resource_pressure: ResourcePressure::new(MemoryLedger::new()),
            chain_propagator: Arc::new(ChainPropagator::new(chain_client)),
            response_size: ResponseSize::new(),
            stream_emitter: StreamEmitter::new(),
            config,
        }
    }
}
