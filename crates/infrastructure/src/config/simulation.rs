//! Failure injection and latency settings

use std::time::Duration;

use domain::ResourceKind;
use serde::{Deserialize, Serialize};

use crate::chaos::{DEFAULT_FAULT_RATE, FaultPolicy};

/// Simulated I/O wait per producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Profile fetch delay in milliseconds
    #[serde(default = "default_profile_ms")]
    pub profile_ms: u64,

    /// Posts fetch delay in milliseconds
    #[serde(default = "default_posts_ms")]
    pub posts_ms: u64,

    /// Comments fetch delay in milliseconds
    #[serde(default = "default_comments_ms")]
    pub comments_ms: u64,
}

const fn default_profile_ms() -> u64 {
    1000
}

const fn default_posts_ms() -> u64 {
    1200
}

const fn default_comments_ms() -> u64 {
    800
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            profile_ms: default_profile_ms(),
            posts_ms: default_posts_ms(),
            comments_ms: default_comments_ms(),
        }
    }
}

impl LatencyConfig {
    /// No delay for any producer
    pub const fn zero() -> Self {
        Self {
            profile_ms: 0,
            posts_ms: 0,
            comments_ms: 0,
        }
    }

    /// Delay for one producer
    pub const fn for_resource(&self, resource: ResourceKind) -> Duration {
        Duration::from_millis(match resource {
            ResourceKind::Profile => self.profile_ms,
            ResourceKind::Posts => self.posts_ms,
            ResourceKind::Comments => self.comments_ms,
        })
    }

    /// Worst-case duration of a dependent chain (sum of all delays)
    pub const fn chain_total(&self) -> Duration {
        Duration::from_millis(self.profile_ms + self.posts_ms + self.comments_ms)
    }

    /// Worst-case duration of a fan-out (longest single delay)
    pub fn fan_out_max(&self) -> Duration {
        Duration::from_millis(self.profile_ms.max(self.posts_ms).max(self.comments_ms))
    }
}

/// Failure injection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Whether failures are injected at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Probability that any single producer call fails
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    /// Seed for a reproducible decision sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Only these resources may fail (empty = all)
    #[serde(default)]
    pub target_resources: Vec<ResourceKind>,

    /// These resources never fail
    #[serde(default)]
    pub exclude_resources: Vec<ResourceKind>,

    /// Per-producer delays
    #[serde(default)]
    pub latency: LatencyConfig,
}

const fn default_enabled() -> bool {
    true
}

const fn default_failure_rate() -> f64 {
    DEFAULT_FAULT_RATE
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            failure_rate: default_failure_rate(),
            seed: None,
            target_resources: Vec::new(),
            exclude_resources: Vec::new(),
            latency: LatencyConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Convert to the policy used by the fault injector
    pub fn to_fault_policy(&self) -> FaultPolicy {
        FaultPolicy::with_rate(self.failure_rate)
            .with_enabled(self.enabled)
            .with_targets(self.target_resources.iter().copied())
            .with_exclusions(self.exclude_resources.iter().copied())
    }
}
