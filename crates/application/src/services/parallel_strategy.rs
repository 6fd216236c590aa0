//! Independent parallel fan-out
//!
//! Profile, posts and comments are requested together with fixed ids instead
//! of derived ones. All three are driven on the calling task and allowed to
//! settle; the run succeeds only if all three succeed. Otherwise the failure
//! that settled first is reported and the other results are discarded, like
//! an all-or-nothing join. When several fail, which one wins depends on
//! completion order, not issue order.

use std::fmt;
use std::sync::Arc;

use domain::{
    Comment, FetchError, FetchOutcome, Post, PostId, Profile, ProfileId, ResourceKind, RunId,
};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::ports::ResourcePort;

/// Owner id used for the posts request
pub const DEFAULT_OWNER_ID: ProfileId = ProfileId::new(1);

/// Post id used for the comments request
pub const DEFAULT_POST_ID: PostId = PostId::new(101);

/// Everything a fully successful parallel run fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParallelReport {
    /// Run identifier
    pub run_id: RunId,
    /// The profile
    pub profile: Profile,
    /// Posts for the fixed owner id
    pub posts: Vec<Post>,
    /// Comments for the fixed post id
    pub comments: Vec<Comment>,
}

enum Settled {
    Profile(FetchOutcome<Profile>),
    Posts(FetchOutcome<Vec<Post>>),
    Comments(FetchOutcome<Vec<Comment>>),
}

/// All-or-nothing fan-out over a resource port
#[derive(Clone)]
pub struct ParallelStrategy {
    resources: Arc<dyn ResourcePort>,
    owner_id: ProfileId,
    post_id: PostId,
}

impl fmt::Debug for ParallelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelStrategy")
            .field("owner_id", &self.owner_id)
            .field("post_id", &self.post_id)
            .finish_non_exhaustive()
    }
}

impl ParallelStrategy {
    /// Create a strategy requesting owner 1 and post 101
    pub fn new(resources: Arc<dyn ResourcePort>) -> Self {
        Self {
            resources,
            owner_id: DEFAULT_OWNER_ID,
            post_id: DEFAULT_POST_ID,
        }
    }

    /// Use different fixed ids for the posts and comments requests
    #[must_use]
    pub const fn with_targets(mut self, owner_id: ProfileId, post_id: PostId) -> Self {
        self.owner_id = owner_id;
        self.post_id = post_id;
        self
    }

    /// Run the fan-out once
    #[instrument(name = "parallel_run", skip(self), fields(owner_id = %self.owner_id, post_id = %self.post_id))]
    pub async fn run(&self) -> FetchOutcome<ParallelReport> {
        let run_id = RunId::new();
        info!(%run_id, "Starting parallel retrieval");

        let mut pending: FuturesUnordered<BoxFuture<'_, Settled>> = FuturesUnordered::new();
        pending.push(
            self.resources
                .fetch_profile()
                .map(Settled::Profile)
                .boxed(),
        );
        pending.push(
            self.resources
                .fetch_posts(self.owner_id)
                .map(Settled::Posts)
                .boxed(),
        );
        pending.push(
            self.resources
                .fetch_comments(self.post_id)
                .map(Settled::Comments)
                .boxed(),
        );

        let mut profile = None;
        let mut posts = None;
        let mut comments = None;
        let mut first_failure: Option<FetchError> = None;

        while let Some(settled) = pending.next().await {
            let failed = match settled {
                Settled::Profile(outcome) => store(&mut profile, outcome),
                Settled::Posts(outcome) => store(&mut posts, outcome),
                Settled::Comments(outcome) => store(&mut comments, outcome),
            };
            if let Some(err) = failed {
                debug!(%run_id, resource = %err.resource(), "Fan-out member failed");
                first_failure.get_or_insert(err);
            }
        }

        if let Some(err) = first_failure {
            warn!(%run_id, error = %err, "Parallel retrieval failed");
            return Err(err);
        }

        let report = ParallelReport {
            run_id,
            profile: settled(profile, ResourceKind::Profile)?,
            posts: settled(posts, ResourceKind::Posts)?,
            comments: settled(comments, ResourceKind::Comments)?,
        };
        info!(%run_id, "Parallel retrieval completed");
        Ok(report)
    }
}

/// Keep a success in its slot, hand back a failure
fn store<T>(slot: &mut Option<T>, outcome: FetchOutcome<T>) -> Option<FetchError> {
    match outcome {
        Ok(value) => {
            *slot = Some(value);
            None
        },
        Err(err) => Some(err),
    }
}

fn settled<T>(slot: Option<T>, resource: ResourceKind) -> FetchOutcome<T> {
    slot.ok_or_else(|| FetchError::new(resource, "Request never settled."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockResourcePort;
    use crate::services::test_fixtures::{comments, failure, posts, profile};

    fn mock_with_failure(failing: Option<ResourceKind>) -> MockResourcePort {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().times(1).returning(move || {
            if failing == Some(ResourceKind::Profile) {
                Err(failure(ResourceKind::Profile))
            } else {
                Ok(profile())
            }
        });
        mock.expect_fetch_posts().times(1).returning(move |_| {
            if failing == Some(ResourceKind::Posts) {
                Err(failure(ResourceKind::Posts))
            } else {
                Ok(posts())
            }
        });
        mock.expect_fetch_comments().times(1).returning(move |post| {
            if failing == Some(ResourceKind::Comments) {
                Err(failure(ResourceKind::Comments))
            } else {
                Ok(comments(post))
            }
        });
        mock
    }

    #[tokio::test]
    async fn all_succeed_reports_the_triple() {
        let report = ParallelStrategy::new(Arc::new(mock_with_failure(None)))
            .run()
            .await
            .unwrap();

        assert_eq!(report.profile, profile());
        assert_eq!(report.posts, posts());
        assert_eq!(report.comments, comments(DEFAULT_POST_ID));
    }

    #[tokio::test]
    async fn any_single_failure_fails_the_run() {
        for failing in ResourceKind::ALL {
            let err = ParallelStrategy::new(Arc::new(mock_with_failure(Some(failing))))
                .run()
                .await
                .unwrap_err();
            assert_eq!(err.resource(), failing);
        }
    }

    #[tokio::test]
    async fn uses_fixed_ids_not_derived_ones() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().returning(|| Ok(profile()));
        mock.expect_fetch_posts()
            .withf(|owner| *owner == ProfileId::new(9))
            .times(1)
            .returning(|_| Ok(posts()));
        mock.expect_fetch_comments()
            .withf(|post| *post == PostId::new(55))
            .times(1)
            .returning(|post| Ok(comments(post)));

        let report = ParallelStrategy::new(Arc::new(mock))
            .with_targets(ProfileId::new(9), PostId::new(55))
            .run()
            .await
            .unwrap();

        assert!(report.comments.iter().all(|c| c.post_id == PostId::new(55)));
    }

    #[test]
    fn store_keeps_success_and_returns_failure() {
        let mut slot = None;
        assert!(store(&mut slot, Ok(3)).is_none());
        assert_eq!(slot, Some(3));

        let mut slot: Option<i32> = None;
        let err = store(&mut slot, Err(failure(ResourceKind::Posts)));
        assert!(err.is_some());
        assert!(slot.is_none());
    }
}
