//! Deterministic failure decisions.

use std::collections::{HashMap, HashSet, VecDeque};

use application::ports::FailureDecisionPort;
use domain::ResourceKind;
use parking_lot::Mutex;

use super::{ChaosContext, ChaosStats};

/// Decision source answering from a fixed plan
///
/// A per-resource script is consumed first, one decision per call. Once a
/// script runs out, the resource falls back to its standing decision: fail if
/// it was listed in [`ScriptedFaults::failing`], succeed otherwise.
#[derive(Debug, Default)]
pub struct ScriptedFaults {
    always_fail: HashSet<ResourceKind>,
    scripts: Mutex<HashMap<ResourceKind, VecDeque<bool>>>,
    context: ChaosContext,
}

impl ScriptedFaults {
    /// Never fail
    pub fn never() -> Self {
        Self::default()
    }

    /// Fail every call for the listed resources
    pub fn failing(resources: impl IntoIterator<Item = ResourceKind>) -> Self {
        Self {
            always_fail: resources.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue decisions for one resource, consumed in call order
    #[must_use]
    pub fn with_script(
        self,
        resource: ResourceKind,
        decisions: impl IntoIterator<Item = bool>,
    ) -> Self {
        self.scripts
            .lock()
            .entry(resource)
            .or_default()
            .extend(decisions);
        self
    }

    /// Get current statistics
    pub fn stats(&self) -> ChaosStats {
        self.context.stats()
    }
}

impl FailureDecisionPort for ScriptedFaults {
    fn should_fail(&self, resource: ResourceKind) -> bool {
        self.context.record_call();
        let scripted = self
            .scripts
            .lock()
            .get_mut(&resource)
            .and_then(VecDeque::pop_front);
        let fail = scripted.unwrap_or_else(|| self.always_fail.contains(&resource));
        if fail {
            self.context.record_fault(resource);
        }
        fail
    }
}
