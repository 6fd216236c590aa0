//! Strategies over the simulated producers, on a paused clock

use std::sync::Arc;
use std::time::Duration;

use application::ports::{FailureDecisionPort, FetchEvent, ResourcePort};
use application::{
    ParallelStrategy, ResilientChainStrategy, RetrievalService, RunReport, SequentialStrategy,
    StageStatus, StrategyKind,
};
use domain::{PostId, ProfileId, ResourceKind};
use infrastructure::{
    FanoutObserver, FixtureConfig, LatencyConfig, RecordingObserver, ScriptedFaults,
    SimulatedResourceAdapter, TokioLatency, TracingObserver,
};
use tokio::time::Instant;

struct Harness {
    adapter: Arc<SimulatedResourceAdapter>,
    observer: Arc<RecordingObserver>,
}

impl Harness {
    fn new(faults: ScriptedFaults) -> Self {
        Self::with_decider(Arc::new(faults))
    }

    fn with_decider(decider: Arc<dyn FailureDecisionPort>) -> Self {
        let observer = Arc::new(RecordingObserver::new());
        let adapter = SimulatedResourceAdapter::new(
            FixtureConfig::default().to_fixture_set().unwrap(),
            LatencyConfig::default(),
            Arc::new(TokioLatency),
            decider,
        )
        .with_observer(
            Arc::new(FanoutObserver::new().with(observer.clone()).with(Arc::new(TracingObserver))),
        );
        Self {
            adapter: Arc::new(adapter),
            observer,
        }
    }

    fn resources(&self) -> Arc<dyn ResourcePort> {
        self.adapter.clone()
    }

    fn calls(&self, resource: ResourceKind) -> usize {
        self.observer.started_count(resource)
    }

    fn started_order(&self) -> Vec<ResourceKind> {
        self.observer
            .take()
            .into_iter()
            .filter_map(|event| match event {
                FetchEvent::Started { resource } => Some(resource),
                _ => None,
            })
            .collect()
    }
}

fn assert_elapsed(started: Instant, expected: Duration) {
    let elapsed = started.elapsed();
    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(5),
        "expected ~{expected:?}, got {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn failure_free_runs_agree_across_strategies() {
    let harness = Harness::new(ScriptedFaults::never());

    let seq = SequentialStrategy::new(harness.resources()).run().await.unwrap();
    let par = ParallelStrategy::new(harness.resources()).run().await.unwrap();
    let chain = ResilientChainStrategy::new(harness.resources()).run().await;

    assert_eq!(seq.profile, par.profile);
    assert_eq!(seq.posts, par.posts);
    assert_eq!(seq.comments, par.comments);

    assert!(chain.result.is_complete());
    assert_eq!(chain.result.profile(), Some(&seq.profile));
    assert_eq!(chain.result.posts(), seq.posts.as_slice());
    assert_eq!(chain.result.comments(), seq.comments.as_slice());
}

#[tokio::test(start_paused = true)]
async fn profile_failure_stops_sequential_and_empties_resilient() {
    let harness = Harness::new(ScriptedFaults::failing([ResourceKind::Profile]));

    let err = SequentialStrategy::new(harness.resources())
        .run()
        .await
        .unwrap_err();
    assert_eq!(err.resource(), ResourceKind::Profile);
    assert_eq!(err.to_string(), "Failed to fetch user profile");
    assert_eq!(harness.calls(ResourceKind::Profile), 1);
    assert_eq!(harness.calls(ResourceKind::Posts), 0);
    assert_eq!(harness.calls(ResourceKind::Comments), 0);

    let chain = ResilientChainStrategy::new(harness.resources()).run().await;
    assert!(chain.result.profile().is_none());
    assert!(chain.result.posts().is_empty());
    assert!(chain.result.comments().is_empty());
}

#[tokio::test(start_paused = true)]
async fn comments_failure_after_profile_and_posts() {
    let harness = Harness::new(ScriptedFaults::failing([ResourceKind::Comments]));

    let err = SequentialStrategy::new(harness.resources())
        .run()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch comments");
    assert_eq!(harness.calls(ResourceKind::Profile), 1);
    assert_eq!(harness.calls(ResourceKind::Posts), 1);
    assert_eq!(harness.calls(ResourceKind::Comments), 1);

    let chain = ResilientChainStrategy::new(harness.resources()).run().await;
    assert!(chain.result.profile().is_some());
    assert_eq!(chain.result.posts().len(), 2);
    assert!(chain.result.comments().is_empty());
    assert_eq!(
        chain.stage(ResourceKind::Comments).unwrap().status,
        StageStatus::Failed {
            message: "Failed to fetch comments: API limit exceeded while fetching comments."
                .to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn chained_strategies_start_producers_in_dependency_order() {
    let harness = Harness::new(ScriptedFaults::never());

    SequentialStrategy::new(harness.resources()).run().await.unwrap();
    assert_eq!(harness.started_order(), ResourceKind::ALL.to_vec());

    ResilientChainStrategy::new(harness.resources()).run().await;
    assert_eq!(harness.started_order(), ResourceKind::ALL.to_vec());
}

#[tokio::test(start_paused = true)]
async fn parallel_fails_for_every_single_failure() {
    for failing in ResourceKind::ALL {
        let harness = Harness::new(ScriptedFaults::failing([failing]));

        let err = ParallelStrategy::new(harness.resources())
            .run()
            .await
            .unwrap_err();

        assert_eq!(err.resource(), failing);
        // All three settle even though only one result could be reported.
        for resource in ResourceKind::ALL {
            assert_eq!(harness.calls(resource), 1);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn parallel_reports_the_failure_that_settles_first() {
    // Comments settles at 800ms, profile at 1000ms.
    let harness = Harness::new(ScriptedFaults::failing([
        ResourceKind::Profile,
        ResourceKind::Comments,
    ]));
    let err = ParallelStrategy::new(harness.resources())
        .run()
        .await
        .unwrap_err();
    assert_eq!(err.resource(), ResourceKind::Comments);

    // Profile settles at 1000ms, posts at 1200ms.
    let harness = Harness::new(ScriptedFaults::failing([
        ResourceKind::Posts,
        ResourceKind::Profile,
    ]));
    let err = ParallelStrategy::new(harness.resources())
        .run()
        .await
        .unwrap_err();
    assert_eq!(err.resource(), ResourceKind::Profile);
}

#[tokio::test(start_paused = true)]
async fn parallel_waits_overlap_and_sequential_waits_add_up() {
    let harness = Harness::new(ScriptedFaults::never());

    let started = Instant::now();
    ParallelStrategy::new(harness.resources()).run().await.unwrap();
    assert_elapsed(started, Duration::from_millis(1200));

    let started = Instant::now();
    SequentialStrategy::new(harness.resources()).run().await.unwrap();
    assert_elapsed(started, Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn parallel_completions_arrive_out_of_issue_order() {
    let harness = Harness::new(ScriptedFaults::never());
    ParallelStrategy::new(harness.resources()).run().await.unwrap();

    let started: Vec<_> = harness
        .observer
        .events()
        .iter()
        .filter(|e| matches!(e, FetchEvent::Started { .. }))
        .map(FetchEvent::resource)
        .collect();
    let settled: Vec<_> = harness
        .observer
        .events()
        .iter()
        .filter(|e| matches!(e, FetchEvent::Succeeded { .. }))
        .map(FetchEvent::resource)
        .collect();

    assert_eq!(started, ResourceKind::ALL.to_vec());
    assert_eq!(
        settled,
        vec![ResourceKind::Comments, ResourceKind::Profile, ResourceKind::Posts]
    );
}

#[tokio::test(start_paused = true)]
async fn producers_are_idempotent_when_never_failing() {
    let harness = Harness::new(ScriptedFaults::never());

    let first = harness.adapter.fetch_profile().await.unwrap();
    let second = harness.adapter.fetch_profile().await.unwrap();
    assert_eq!(first, second);

    let first = harness.adapter.fetch_comments(PostId::new(101)).await.unwrap();
    let second = harness.adapter.fetch_comments(PostId::new(101)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn posts_fixture_ignores_the_owner_id() {
    let harness = Harness::new(ScriptedFaults::never());

    let posts = harness.adapter.fetch_posts(ProfileId::new(7)).await.unwrap();

    let ids: Vec<u64> = posts.iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec![101, 102]);
    assert!(posts.iter().all(|p| p.owner_id == ProfileId::new(1)));
}

#[tokio::test(start_paused = true)]
async fn resilient_skip_propagates_past_healthy_producers() {
    let harness = Harness::new(ScriptedFaults::failing([ResourceKind::Profile]));

    let chain = ResilientChainStrategy::new(harness.resources()).run().await;

    assert!(chain.result.posts().is_empty());
    assert!(chain.result.comments().is_empty());
    assert_eq!(harness.calls(ResourceKind::Posts), 0);
    assert_eq!(harness.calls(ResourceKind::Comments), 0);

    // The same producers succeed when called directly.
    assert!(harness.adapter.fetch_posts(ProfileId::new(1)).await.is_ok());
    assert!(harness.adapter.fetch_comments(PostId::new(101)).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn resilient_posts_failure_keeps_profile() {
    let harness = Harness::new(ScriptedFaults::failing([ResourceKind::Posts]));
    let observer = Arc::new(RecordingObserver::new());

    let chain = ResilientChainStrategy::new(harness.resources())
        .with_observer(observer.clone())
        .run()
        .await;

    assert!(chain.result.profile().is_some());
    assert_eq!(chain.result.missing(), vec![ResourceKind::Posts, ResourceKind::Comments]);
    assert_eq!(
        observer.events(),
        vec![FetchEvent::Skipped {
            resource: ResourceKind::Comments,
            reason: "no posts were available".to_string()
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn scripted_sequence_drives_consecutive_runs() {
    let faults = ScriptedFaults::never().with_script(ResourceKind::Posts, [true, false]);
    let harness = Harness::new(faults);
    let service = RetrievalService::new(harness.resources());

    let err = service.run(StrategyKind::Sequential).await.unwrap_err();
    assert_eq!(err.resource(), Some(ResourceKind::Posts));

    let report = service.run(StrategyKind::Sequential).await.unwrap();
    assert_eq!(report.kind(), StrategyKind::Sequential);
}

#[tokio::test(start_paused = true)]
async fn service_resilient_run_never_fails() {
    let harness = Harness::new(ScriptedFaults::failing(ResourceKind::ALL));
    let service = RetrievalService::new(harness.resources());

    let RunReport::Resilient(chain) = service.run(StrategyKind::Resilient).await.unwrap() else {
        unreachable!("Expected resilient report");
    };
    assert_eq!(chain.result.missing(), ResourceKind::ALL.to_vec());
    assert_eq!(harness.calls(ResourceKind::Profile), 1);
}
