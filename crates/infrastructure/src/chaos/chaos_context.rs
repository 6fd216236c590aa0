//! Chaos context for tracking fault injection statistics.

use std::sync::atomic::{AtomicU64, Ordering};

use domain::ResourceKind;
use serde::{Deserialize, Serialize};

/// Snapshot of fault injection statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosStats {
    /// Total number of decisions made
    pub total_calls: u64,
    /// Number of decisions that injected a fault
    pub faults_injected: u64,
    /// Faults injected into profile fetches
    pub profile_faults: u64,
    /// Faults injected into posts fetches
    pub posts_faults: u64,
    /// Faults injected into comments fetches
    pub comments_faults: u64,
}

impl ChaosStats {
    /// Calculate the actual fault rate
    #[allow(clippy::cast_precision_loss)]
    pub fn actual_fault_rate(&self) -> f64 {
        if self.total_calls == 0 {
            0.0
        } else {
            self.faults_injected as f64 / self.total_calls as f64
        }
    }

    /// Faults injected into one resource
    pub const fn faults_for(&self, resource: ResourceKind) -> u64 {
        match resource {
            ResourceKind::Profile => self.profile_faults,
            ResourceKind::Posts => self.posts_faults,
            ResourceKind::Comments => self.comments_faults,
        }
    }
}

/// Shared counters behind a decision source
#[derive(Debug, Default)]
pub struct ChaosContext {
    total_calls: AtomicU64,
    faults: [AtomicU64; 3],
}

const fn slot(resource: ResourceKind) -> usize {
    match resource {
        ResourceKind::Profile => 0,
        ResourceKind::Posts => 1,
        ResourceKind::Comments => 2,
    }
}

impl ChaosContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision being made
    pub fn record_call(&self) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fault being injected
    pub fn record_fault(&self, resource: ResourceKind) {
        self.faults[slot(resource)].fetch_add(1, Ordering::Relaxed);
    }

    /// Take a snapshot of the counters
    pub fn stats(&self) -> ChaosStats {
        let profile_faults = self.faults[0].load(Ordering::Relaxed);
        let posts_faults = self.faults[1].load(Ordering::Relaxed);
        let comments_faults = self.faults[2].load(Ordering::Relaxed);
        ChaosStats {
            total_calls: self.total_calls.load(Ordering::Relaxed),
            faults_injected: profile_faults + posts_faults + comments_faults,
            profile_faults,
            posts_faults,
            comments_faults,
        }
    }
}
