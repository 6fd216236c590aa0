//! Fault policy: which resources may fail and how often.

use domain::ResourceKind;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Failure probability used when nothing else is configured
pub const DEFAULT_FAULT_RATE: f64 = 0.3;

/// Policy defining when faults should be injected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultPolicy {
    /// Probability of injecting a fault (0.0 - 1.0)
    #[serde(default = "default_fault_rate")]
    pub fault_rate: f64,

    /// Whether this policy is active
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Only inject faults for these resources (empty = all)
    #[serde(default)]
    pub target_resources: Vec<ResourceKind>,

    /// Never inject faults for these resources
    #[serde(default)]
    pub exclude_resources: Vec<ResourceKind>,
}

const fn default_fault_rate() -> f64 {
    DEFAULT_FAULT_RATE
}

const fn default_enabled() -> bool {
    true
}

impl Default for FaultPolicy {
    fn default() -> Self {
        Self {
            fault_rate: DEFAULT_FAULT_RATE,
            enabled: true,
            target_resources: Vec::new(),
            exclude_resources: Vec::new(),
        }
    }
}

impl FaultPolicy {
    /// A policy that never injects faults
    pub fn never() -> Self {
        Self {
            fault_rate: 0.0,
            enabled: false,
            ..Default::default()
        }
    }

    /// A policy that always injects faults
    pub fn always() -> Self {
        Self::with_rate(1.0)
    }

    /// A policy with a specific fault rate, clamped to 0.0 - 1.0
    pub fn with_rate(rate: f64) -> Self {
        Self {
            fault_rate: rate.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Restrict faults to the given resources
    #[must_use]
    pub fn with_targets(mut self, resources: impl IntoIterator<Item = ResourceKind>) -> Self {
        self.target_resources = resources.into_iter().collect();
        self
    }

    /// Exclude the given resources from faults
    #[must_use]
    pub fn with_exclusions(mut self, resources: impl IntoIterator<Item = ResourceKind>) -> Self {
        self.exclude_resources = resources.into_iter().collect();
        self
    }

    /// Enable or disable the policy
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check whether a resource is subject to this policy
    pub fn should_target(&self, resource: ResourceKind) -> bool {
        if !self.enabled || self.exclude_resources.contains(&resource) {
            return false;
        }
        self.target_resources.is_empty() || self.target_resources.contains(&resource)
    }

    /// Draw one decision from `rng`
    ///
    /// Fails when a uniform sample in `[0, 1)` falls below the rate, so a rate
    /// of 0.0 never fails and 1.0 always does.
    pub fn should_inject<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if !self.enabled || self.fault_rate <= 0.0 {
            return false;
        }
        if self.fault_rate >= 1.0 {
            return true;
        }
        rng.random::<f64>() < self.fault_rate
    }
}
