//! Port definitions for application layer
//!
//! Ports are interfaces that define how the strategies reach the simulated
//! data source. Adapters in the infrastructure layer implement these ports.

mod failure_decision_port;
mod fetch_observer;
mod latency_port;
mod resource_port;

pub use failure_decision_port::FailureDecisionPort;
pub use fetch_observer::{FetchEvent, FetchObserver, NoopObserver};
pub use latency_port::LatencyPort;
#[cfg(test)]
pub use resource_port::MockResourcePort;
pub use resource_port::ResourcePort;
