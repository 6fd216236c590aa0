//! Partial-failure-tolerant chaining
//!
//! Same dependency order as the sequential chain, but every stage failure is
//! caught and turned into an absent/empty field. A stage whose input is
//! missing is skipped rather than attempted:
//!
//! ```text
//! Start -> ProfileAttempted -> PostsAttempted | PostsSkipped
//!       -> CommentsAttempted | CommentsSkipped -> Done
//! ```
//!
//! The run always ends in `Done` with a [`CombinedResult`].

use std::fmt;
use std::sync::Arc;

use domain::{CombinedResult, ResourceKind, RunId};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use super::ContextualResources;
use crate::ports::{FetchEvent, FetchObserver, NoopObserver, ResourcePort};

/// How one stage of the chain ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageStatus {
    /// The producer returned data
    Succeeded,
    /// The producer failed; the field was left empty
    Failed { message: String },
    /// The producer was never invoked because an upstream stage had no data
    Skipped { reason: String },
}

/// Outcome of a single stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageRecord {
    /// The stage's resource
    pub resource: ResourceKind,
    /// How it ended
    #[serde(flatten)]
    pub status: StageStatus,
}

impl StageRecord {
    const fn new(resource: ResourceKind, status: StageStatus) -> Self {
        Self { resource, status }
    }

    /// Whether the stage was attempted at all
    pub const fn attempted(&self) -> bool {
        !matches!(self.status, StageStatus::Skipped { .. })
    }
}

/// Result of a resilient run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    /// Run identifier
    pub run_id: RunId,
    /// Best-effort combined data
    pub result: CombinedResult,
    /// One record per stage, in dependency order
    pub stages: Vec<StageRecord>,
}

impl ChainReport {
    /// The record for a given stage
    pub fn stage(&self, resource: ResourceKind) -> Option<&StageRecord> {
        self.stages.iter().find(|s| s.resource == resource)
    }
}

/// Best-effort chain that degrades field by field
#[derive(Clone)]
pub struct ResilientChainStrategy {
    resources: ContextualResources,
    observer: Arc<dyn FetchObserver>,
}

impl fmt::Debug for ResilientChainStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResilientChainStrategy")
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

impl ResilientChainStrategy {
    /// Create a strategy over the raw producers, reporting failures in wrapped form
    pub fn new(resources: Arc<dyn ResourcePort>) -> Self {
        Self {
            resources: ContextualResources::new(resources),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Report skipped stages to an observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run the chain once; never fails
    #[instrument(name = "resilient_run", skip(self))]
    pub async fn run(&self) -> ChainReport {
        let run_id = RunId::new();
        info!(%run_id, "Starting resilient retrieval");
        let mut stages = Vec::with_capacity(ResourceKind::ALL.len());

        // Start -> ProfileAttempted
        let mut result = match self.resources.fetch_profile().await {
            Ok(profile) => {
                info!(%run_id, profile_id = %profile.id(), "User profile retrieved");
                stages.push(StageRecord::new(ResourceKind::Profile, StageStatus::Succeeded));
                CombinedResult::with_profile(profile)
            },
            Err(e) => {
                error!(%run_id, error = %e, "User profile unavailable");
                stages.push(StageRecord::new(
                    ResourceKind::Profile,
                    StageStatus::Failed {
                        message: e.to_string(),
                    },
                ));
                CombinedResult::empty()
            },
        };

        // ProfileAttempted -> PostsAttempted | PostsSkipped
        match result.profile().map(domain::Profile::id) {
            Some(owner_id) => match self.resources.fetch_posts(owner_id).await {
                Ok(posts) => {
                    info!(%run_id, count = posts.len(), "Posts retrieved");
                    stages.push(StageRecord::new(ResourceKind::Posts, StageStatus::Succeeded));
                    result = result.and_posts(posts);
                },
                Err(e) => {
                    error!(%run_id, error = %e, "Posts unavailable");
                    stages.push(StageRecord::new(
                        ResourceKind::Posts,
                        StageStatus::Failed {
                            message: e.to_string(),
                        },
                    ));
                },
            },
            None => stages.push(self.skip(
                run_id,
                ResourceKind::Posts,
                "user profile was not available",
            )),
        }

        // -> CommentsAttempted | CommentsSkipped
        match result.posts().first().map(|post| post.id) {
            Some(post_id) => match self.resources.fetch_comments(post_id).await {
                Ok(comments) => {
                    info!(%run_id, count = comments.len(), %post_id, "Comments retrieved");
                    stages.push(StageRecord::new(
                        ResourceKind::Comments,
                        StageStatus::Succeeded,
                    ));
                    result = result.and_comments(comments);
                },
                Err(e) => {
                    error!(%run_id, error = %e, "Comments unavailable");
                    stages.push(StageRecord::new(
                        ResourceKind::Comments,
                        StageStatus::Failed {
                            message: e.to_string(),
                        },
                    ));
                },
            },
            None => {
                let reason = if result.profile().is_none() {
                    "user profile was not available"
                } else {
                    "no posts were available"
                };
                stages.push(self.skip(run_id, ResourceKind::Comments, reason));
            },
        }

        info!(
            %run_id,
            complete = result.is_complete(),
            missing = ?result.missing(),
            "Resilient retrieval finished"
        );

        ChainReport {
            run_id,
            result,
            stages,
        }
    }

    fn skip(&self, run_id: RunId, resource: ResourceKind, reason: &str) -> StageRecord {
        warn!(%run_id, %resource, reason, "Skipping fetch");
        self.observer.on_event(&FetchEvent::Skipped {
            resource,
            reason: reason.to_string(),
        });
        StageRecord::new(
            resource,
            StageStatus::Skipped {
                reason: reason.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use domain::PostId;
    use parking_lot::Mutex;

    use super::*;
    use crate::ports::MockResourcePort;
    use crate::services::test_fixtures::{comments, failure, posts, profile};

    #[derive(Default)]
    struct Collecting(Mutex<Vec<FetchEvent>>);

    impl FetchObserver for Collecting {
        fn on_event(&self, event: &FetchEvent) {
            self.0.lock().push(event.clone());
        }
    }

    #[tokio::test]
    async fn all_stages_succeed() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().times(1).returning(|| Ok(profile()));
        mock.expect_fetch_posts().times(1).returning(|_| Ok(posts()));
        mock.expect_fetch_comments()
            .times(1)
            .returning(|post| Ok(comments(post)));

        let report = ResilientChainStrategy::new(Arc::new(mock)).run().await;

        assert!(report.result.is_complete());
        assert_eq!(report.result.profile(), Some(&profile()));
        assert_eq!(report.result.posts(), posts().as_slice());
        assert_eq!(report.result.comments(), comments(PostId::new(101)).as_slice());
        assert!(report.stages.iter().all(|s| s.status == StageStatus::Succeeded));
    }

    #[tokio::test]
    async fn profile_failure_skips_posts_and_comments() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile()
            .times(1)
            .returning(|| Err(failure(ResourceKind::Profile)));
        mock.expect_fetch_posts().times(0);
        mock.expect_fetch_comments().times(0);
        let observer = Arc::new(Collecting::default());

        let report = ResilientChainStrategy::new(Arc::new(mock))
            .with_observer(observer.clone())
            .run()
            .await;

        assert_eq!(report.result, CombinedResult::empty());
        assert_eq!(
            report.stage(ResourceKind::Profile).unwrap().status,
            StageStatus::Failed {
                message: "Failed to fetch user profile: Network issue while fetching user profile."
                    .to_string()
            }
        );
        assert!(!report.stage(ResourceKind::Posts).unwrap().attempted());
        assert!(!report.stage(ResourceKind::Comments).unwrap().attempted());

        let skipped: Vec<_> = observer.0.lock().iter().map(FetchEvent::resource).collect();
        assert_eq!(skipped, vec![ResourceKind::Posts, ResourceKind::Comments]);
    }

    #[tokio::test]
    async fn posts_failure_skips_comments_but_keeps_profile() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().returning(|| Ok(profile()));
        mock.expect_fetch_posts()
            .times(1)
            .returning(|_| Err(failure(ResourceKind::Posts)));
        mock.expect_fetch_comments().times(0);

        let report = ResilientChainStrategy::new(Arc::new(mock)).run().await;

        assert_eq!(report.result.profile(), Some(&profile()));
        assert!(report.result.posts().is_empty());
        assert!(report.result.comments().is_empty());
        assert_eq!(
            report.stage(ResourceKind::Comments).unwrap().status,
            StageStatus::Skipped {
                reason: "no posts were available".to_string()
            }
        );
    }

    #[tokio::test]
    async fn comments_failure_keeps_profile_and_posts() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().returning(|| Ok(profile()));
        mock.expect_fetch_posts().returning(|_| Ok(posts()));
        mock.expect_fetch_comments()
            .times(1)
            .returning(|_| Err(failure(ResourceKind::Comments)));

        let report = ResilientChainStrategy::new(Arc::new(mock)).run().await;

        assert_eq!(report.result.profile(), Some(&profile()));
        assert_eq!(report.result.posts(), posts().as_slice());
        assert!(report.result.comments().is_empty());
        assert_eq!(report.result.missing(), vec![ResourceKind::Comments]);
    }

    #[tokio::test]
    async fn empty_posts_skip_comments() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().returning(|| Ok(profile()));
        mock.expect_fetch_posts().returning(|_| Ok(Vec::new()));
        mock.expect_fetch_comments().times(0);

        let report = ResilientChainStrategy::new(Arc::new(mock)).run().await;

        assert_eq!(report.stage(ResourceKind::Posts).unwrap().status, StageStatus::Succeeded);
        assert!(!report.stage(ResourceKind::Comments).unwrap().attempted());
    }

    #[test]
    fn stage_record_serializes_flat() {
        let record = StageRecord::new(
            ResourceKind::Posts,
            StageStatus::Skipped {
                reason: "none".to_string(),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"resource":"posts","status":"skipped","reason":"none"}"#
        );
    }
}
