//! Per-run summaries printed by the driver

use std::time::Duration;

use application::ports::FetchEvent;
use application::{ApplicationError, RunReport, StrategyKind};
use domain::{ResourceKind, RunId};
use serde::Serialize;

/// How a run ended
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The strategy returned a report
    Completed { report: RunReport },
    /// A fail-fast strategy aborted
    Failed {
        resource: Option<ResourceKind>,
        reason: String,
    },
}

/// One strategy run, timed, with its event timeline
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub strategy: StrategyKind,
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub outcome: RunOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<FetchEvent>,
}

impl RunSummary {
    pub fn new(
        strategy: StrategyKind,
        elapsed: Duration,
        outcome: Result<RunReport, ApplicationError>,
        events: Vec<FetchEvent>,
    ) -> Self {
        let outcome = match outcome {
            Ok(report) => RunOutcome::Completed { report },
            Err(err) => RunOutcome::Failed {
                resource: err.resource(),
                reason: err.to_string(),
            },
        };
        Self {
            strategy,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            outcome,
            events,
        }
    }

    /// Whether the strategy produced a report
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { .. })
    }

    /// Run id of the report, if there is one
    pub const fn run_id(&self) -> Option<RunId> {
        match &self.outcome {
            RunOutcome::Completed { report } => Some(match report {
                RunReport::Sequential(r) => r.run_id,
                RunReport::Parallel(r) => r.run_id,
                RunReport::Resilient(r) => r.run_id,
            }),
            RunOutcome::Failed { .. } => None,
        }
    }

    /// Drop the event timeline
    #[must_use]
    pub fn without_events(mut self) -> Self {
        self.events.clear();
        self
    }
}
