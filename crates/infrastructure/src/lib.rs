//! Infrastructure layer - Simulated data source and runtime plumbing
//!
//! Implements the ports defined in the application layer: the simulated
//! producers, failure injection, latency, and diagnostic observers. Also
//! owns configuration loading and tracing setup.

pub mod adapters;
pub mod chaos;
pub mod config;
pub mod latency;
pub mod observers;
pub mod telemetry;

pub use adapters::{FixtureSet, SimulatedResourceAdapter};
pub use chaos::{ChaosStats, FaultInjector, FaultPolicy, ScriptedFaults};
pub use config::{AppConfig, DemoConfig, FixtureConfig, LatencyConfig, SimulationConfig};
pub use latency::{NoLatency, TokioLatency};
pub use observers::{FanoutObserver, RecordingObserver, TracingObserver};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
