//! Strategy dispatch
//!
//! One entry point over the three strategies, each built on the same
//! producers. Strategies share no state between runs.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use domain::{PostId, ProfileId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    ChainReport, ParallelReport, ParallelStrategy, ResilientChainStrategy, SequentialReport,
    SequentialStrategy,
};
use crate::error::ApplicationError;
use crate::ports::{FetchObserver, NoopObserver, ResourcePort};

/// The available orchestration strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Fail-fast dependent chain
    Sequential,
    /// All-or-nothing fan-out
    Parallel,
    /// Best-effort dependent chain
    Resilient,
}

impl StrategyKind {
    /// Demonstration order
    pub const ALL: [Self; 3] = [Self::Sequential, Self::Parallel, Self::Resilient];

    /// Short machine-readable name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Resilient => "resilient",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "parallel" | "par" => Ok(Self::Parallel),
            "resilient" | "chain" => Ok(Self::Resilient),
            _ => Err(format!(
                "Invalid strategy: {s}. Use 'sequential', 'parallel' or 'resilient'"
            )),
        }
    }
}

/// Report of a successful run of any strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum RunReport {
    /// Sequential chain completed
    Sequential(SequentialReport),
    /// Parallel fan-out completed
    Parallel(ParallelReport),
    /// Resilient chain finished (always)
    Resilient(ChainReport),
}

impl RunReport {
    /// Which strategy produced this report
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Sequential(_) => StrategyKind::Sequential,
            Self::Parallel(_) => StrategyKind::Parallel,
            Self::Resilient(_) => StrategyKind::Resilient,
        }
    }
}

/// Runs any strategy over one set of producers
#[derive(Clone)]
pub struct RetrievalService {
    sequential: SequentialStrategy,
    parallel: ParallelStrategy,
    resilient: ResilientChainStrategy,
}

impl fmt::Debug for RetrievalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrievalService")
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

impl RetrievalService {
    /// Create a service over the given producers
    pub fn new(resources: Arc<dyn ResourcePort>) -> Self {
        Self::with_observer(resources, Arc::new(NoopObserver))
    }

    /// Create a service whose resilient chain reports skips to `observer`
    pub fn with_observer(
        resources: Arc<dyn ResourcePort>,
        observer: Arc<dyn FetchObserver>,
    ) -> Self {
        Self {
            sequential: SequentialStrategy::new(Arc::clone(&resources)),
            parallel: ParallelStrategy::new(Arc::clone(&resources)),
            resilient: ResilientChainStrategy::new(resources).with_observer(observer),
        }
    }

    /// Use different fixed ids for the parallel fan-out
    #[must_use]
    pub fn with_parallel_targets(mut self, owner_id: ProfileId, post_id: PostId) -> Self {
        self.parallel = self.parallel.with_targets(owner_id, post_id);
        self
    }

    /// Run one strategy
    ///
    /// Sequential and parallel runs surface their single failure reason as
    /// [`ApplicationError::Fetch`]; resilient runs always succeed.
    pub async fn run(&self, kind: StrategyKind) -> Result<RunReport, ApplicationError> {
        debug!(strategy = %kind, "Dispatching strategy run");
        match kind {
            StrategyKind::Sequential => Ok(RunReport::Sequential(self.sequential.run().await?)),
            StrategyKind::Parallel => Ok(RunReport::Parallel(self.parallel.run().await?)),
            StrategyKind::Resilient => Ok(RunReport::Resilient(self.resilient.run().await)),
        }
    }
}
