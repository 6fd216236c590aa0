//! Random failure decisions.

use application::ports::FailureDecisionPort;
use domain::ResourceKind;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::{ChaosContext, ChaosStats, FaultPolicy};

/// Fault injector drawing an independent decision for every producer call
#[derive(Debug)]
pub struct FaultInjector {
    policy: FaultPolicy,
    rng: Mutex<StdRng>,
    context: ChaosContext,
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::new(FaultPolicy::default())
    }
}

impl FaultInjector {
    /// Create an injector seeded from the operating system
    pub fn new(policy: FaultPolicy) -> Self {
        Self::with_rng(policy, StdRng::from_os_rng())
    }

    /// Create an injector whose decision sequence is reproducible
    pub fn seeded(policy: FaultPolicy, seed: u64) -> Self {
        Self::with_rng(policy, StdRng::seed_from_u64(seed))
    }

    /// Create an injector from an optional seed
    pub fn from_seed(policy: FaultPolicy, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(policy, seed),
            None => Self::new(policy),
        }
    }

    /// Create a disabled injector (never fails)
    pub fn disabled() -> Self {
        Self::with_rng(FaultPolicy::never(), StdRng::seed_from_u64(0))
    }

    fn with_rng(policy: FaultPolicy, rng: StdRng) -> Self {
        Self {
            policy,
            rng: Mutex::new(rng),
            context: ChaosContext::new(),
        }
    }

    /// Get the active policy
    pub const fn policy(&self) -> &FaultPolicy {
        &self.policy
    }

    /// Get current statistics
    pub fn stats(&self) -> ChaosStats {
        self.context.stats()
    }
}

impl FailureDecisionPort for FaultInjector {
    fn should_fail(&self, resource: ResourceKind) -> bool {
        self.context.record_call();
        if !self.policy.should_target(resource) {
            return false;
        }

        let fail = self.policy.should_inject(&mut *self.rng.lock());
        if fail {
            self.context.record_fault(resource);
            debug!(%resource, rate = self.policy.fault_rate, "Injecting fault");
        }
        fail
    }
}
