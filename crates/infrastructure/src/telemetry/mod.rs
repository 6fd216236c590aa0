//! Tracing subscriber setup
//!
//! Console logging only; the filter comes from `RUST_LOG` when set, otherwise
//! from the configured directive string.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
