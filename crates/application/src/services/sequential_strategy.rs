//! Sequential dependent chaining
//!
//! Profile, then the profile's posts, then comments on the first post.
//! Strict fail-fast: the first failure aborts the chain, no downstream
//! producer is invoked, and anything fetched so far is dropped from the
//! report (it remains visible through the producers' diagnostic events).

use std::fmt;
use std::sync::Arc;

use domain::{Comment, FetchError, FetchOutcome, Post, Profile, ResourceKind, RunId};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::ports::ResourcePort;

/// Everything a fully successful sequential run fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequentialReport {
    /// Run identifier
    pub run_id: RunId,
    /// The profile that rooted the chain
    pub profile: Profile,
    /// Posts owned by the profile
    pub posts: Vec<Post>,
    /// Comments on the first post
    pub comments: Vec<Comment>,
}

/// Fail-fast dependent chain over a resource port
#[derive(Clone)]
pub struct SequentialStrategy {
    resources: Arc<dyn ResourcePort>,
}

impl fmt::Debug for SequentialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialStrategy").finish_non_exhaustive()
    }
}

impl SequentialStrategy {
    /// Create a strategy over the raw producers
    pub fn new(resources: Arc<dyn ResourcePort>) -> Self {
        Self { resources }
    }

    /// Run the chain once
    #[instrument(name = "sequential_run", skip(self))]
    pub async fn run(&self) -> FetchOutcome<SequentialReport> {
        let run_id = RunId::new();
        info!(%run_id, "Starting sequential retrieval");

        let outcome = self.chain(run_id).await;
        match &outcome {
            Ok(report) => info!(
                %run_id,
                posts = report.posts.len(),
                comments = report.comments.len(),
                "Sequential retrieval completed"
            ),
            Err(e) => warn!(%run_id, error = %e, "Sequential retrieval aborted"),
        }
        outcome
    }

    async fn chain(&self, run_id: RunId) -> FetchOutcome<SequentialReport> {
        let profile = self.resources.fetch_profile().await?;
        let posts = self.resources.fetch_posts(profile.id()).await?;

        // No first post, no comments stage.
        let first_post = posts
            .first()
            .map(|post| post.id)
            .ok_or_else(|| FetchError::new(ResourceKind::Posts, "No posts to comment on."))?;

        let comments = self.resources.fetch_comments(first_post).await?;

        Ok(SequentialReport {
            run_id,
            profile,
            posts,
            comments,
        })
    }
}
