//! Application configuration
//!
//! Split into focused sub-modules:
//! - `simulation`: failure rate, seed, per-resource latency
//! - `fixtures`: the payloads and failure details the producers return
//! - `demo`: driver targets and spacing
//!
//! Sources are layered: built-in defaults, then an optional
//! `chainfetch.toml`, then `CHAINFETCH_` environment variables
//! (e.g. `CHAINFETCH_SIMULATION__FAILURE_RATE=0.5`).

mod demo;
mod fixtures;
mod simulation;

use std::path::Path;

use application::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use demo::DemoConfig;
pub use fixtures::{CommentFixture, FailureDetails, FixtureConfig, PostFixture, ProfileFixture};
pub use simulation::{LatencyConfig, SimulationConfig};

use crate::telemetry::TelemetryConfig;

/// Default configuration file name, looked up without extension
pub const CONFIG_FILE: &str = "chainfetch";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CHAINFETCH";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Failure injection and latency
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Producer payloads
    #[serde(default)]
    pub fixtures: FixtureConfig,

    /// Demonstration driver settings
    #[serde(default)]
    pub demo: DemoConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `chainfetch.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., CHAINFETCH_DEMO__PARALLEL_POST_ID)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(
            failure_rate = loaded.simulation.failure_rate,
            seeded = loaded.simulation.seed.is_some(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Check cross-field constraints the type system cannot express
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let rate = self.simulation.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ApplicationError::Configuration(format!(
                "simulation.failure_rate must be between 0.0 and 1.0, got {rate}"
            )));
        }
        if self.fixtures.posts.is_empty() {
            return Err(ApplicationError::Configuration(
                "fixtures.posts must contain at least one post".to_string(),
            ));
        }
        if self.fixtures.comments.is_empty() {
            return Err(ApplicationError::Configuration(
                "fixtures.comments must contain at least one comment".to_string(),
            ));
        }
        self.fixtures
            .to_fixture_set()
            .map_err(|e| ApplicationError::Configuration(format!("fixtures.profile: {e}")))?;
        Ok(())
    }
}
