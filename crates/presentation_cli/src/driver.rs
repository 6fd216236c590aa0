//! Demonstration driver
//!
//! Wires the simulated producers from configuration and runs strategies,
//! one fresh observer per run so each summary carries its own timeline.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use application::ports::{FailureDecisionPort, FetchObserver, LatencyPort};
use application::{RetrievalService, StrategyKind};
use domain::ResourceKind;
use infrastructure::{
    AppConfig, ChaosStats, DemoConfig, FanoutObserver, FaultInjector, FixtureSet, LatencyConfig,
    NoLatency, RecordingObserver, ScriptedFaults, SimulatedResourceAdapter, TokioLatency,
    TracingObserver,
};
use tokio::time::Instant;
use tracing::{info, instrument};

use crate::summary::RunSummary;

/// Command-line adjustments to how producers behave
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    /// Fail these resources on every call instead of drawing at random
    pub fail: Vec<ResourceKind>,
    /// Skip simulated latency
    pub no_latency: bool,
}

/// Where failure decisions come from
#[derive(Debug, Clone)]
enum DecisionSource {
    Random(Arc<FaultInjector>),
    Scripted(Arc<ScriptedFaults>),
}

impl DecisionSource {
    fn port(&self) -> Arc<dyn FailureDecisionPort> {
        match self {
            Self::Random(injector) => injector.clone(),
            Self::Scripted(faults) => faults.clone(),
        }
    }

    fn stats(&self) -> ChaosStats {
        match self {
            Self::Random(injector) => injector.stats(),
            Self::Scripted(faults) => faults.stats(),
        }
    }
}

/// Runs strategies against one shared decision source
pub struct Driver {
    fixtures: FixtureSet,
    latency: LatencyConfig,
    clock: Arc<dyn LatencyPort>,
    decisions: DecisionSource,
    demo: DemoConfig,
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("latency", &self.latency)
            .field("decisions", &self.decisions)
            .field("demo", &self.demo)
            .finish_non_exhaustive()
    }
}

impl Driver {
    /// Build a driver from validated configuration
    pub fn from_config(config: &AppConfig, options: &DriverOptions) -> anyhow::Result<Self> {
        let fixtures = config.fixtures.to_fixture_set()?;

        let decisions = if options.fail.is_empty() {
            DecisionSource::Random(Arc::new(FaultInjector::from_seed(
                config.simulation.to_fault_policy(),
                config.simulation.seed,
            )))
        } else {
            DecisionSource::Scripted(Arc::new(ScriptedFaults::failing(
                options.fail.iter().copied(),
            )))
        };

        let (latency, clock, demo): (LatencyConfig, Arc<dyn LatencyPort>, DemoConfig) =
            if options.no_latency {
                let demo = DemoConfig {
                    sequential_spacing_ms: 0,
                    parallel_spacing_ms: 0,
                    ..config.demo.clone()
                };
                (LatencyConfig::zero(), Arc::new(NoLatency), demo)
            } else {
                (
                    config.simulation.latency,
                    Arc::new(TokioLatency),
                    config.demo.clone(),
                )
            };

        Ok(Self {
            fixtures,
            latency,
            clock,
            decisions,
            demo,
        })
    }

    /// Injection statistics accumulated over every run so far
    pub fn stats(&self) -> ChaosStats {
        self.decisions.stats()
    }

    fn service(&self, recorder: Arc<RecordingObserver>) -> RetrievalService {
        let observer: Arc<dyn FetchObserver> = Arc::new(
            FanoutObserver::new()
                .with(recorder)
                .with(Arc::new(TracingObserver)),
        );
        let adapter = SimulatedResourceAdapter::new(
            self.fixtures.clone(),
            self.latency,
            Arc::clone(&self.clock),
            self.decisions.port(),
        )
        .with_observer(Arc::clone(&observer));

        let (owner_id, post_id) = self.demo.parallel_targets();
        RetrievalService::with_observer(Arc::new(adapter), observer)
            .with_parallel_targets(owner_id, post_id)
    }

    /// Run one strategy and summarize it
    #[instrument(skip(self))]
    pub async fn run(&self, kind: StrategyKind) -> RunSummary {
        let recorder = Arc::new(RecordingObserver::new());
        let service = self.service(Arc::clone(&recorder));

        let started = Instant::now();
        let outcome = service.run(kind).await;
        let elapsed = started.elapsed();

        let summary = RunSummary::new(kind, elapsed, outcome, recorder.take());
        info!(
            strategy = %kind,
            elapsed_ms = summary.elapsed_ms,
            succeeded = summary.succeeded(),
            "Run finished"
        );
        summary
    }

    /// Sequential, then parallel, then resilient
    ///
    /// With `await_completion` each run finishes before the next starts.
    /// Otherwise runs start on the configured spacing and may overlap.
    pub async fn demo(&self) -> Vec<RunSummary> {
        if self.demo.await_completion {
            let mut summaries = Vec::with_capacity(StrategyKind::ALL.len());
            for kind in StrategyKind::ALL {
                summaries.push(self.run(kind).await);
            }
            return summaries;
        }

        let first = self.demo.sequential_spacing();
        let second = first + self.demo.parallel_spacing();
        let (sequential, parallel, resilient) = tokio::join!(
            self.run_after(Duration::ZERO, StrategyKind::Sequential),
            self.run_after(first, StrategyKind::Parallel),
            self.run_after(second, StrategyKind::Resilient),
        );
        vec![sequential, parallel, resilient]
    }

    async fn run_after(&self, delay: Duration, kind: StrategyKind) -> RunSummary {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.run(kind).await
    }
}
