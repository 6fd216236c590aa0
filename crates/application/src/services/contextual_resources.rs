//! Wrapping adapter over the raw producers
//!
//! Same producers, same latency and failure decisions; only the failure
//! shape changes. A raw [`domain::FetchError`] becomes
//! [`ApplicationError::StageFailed`] carrying
//! `"Failed to fetch <resource>: <detail>"`.

use std::fmt;
use std::sync::Arc;

use domain::{Comment, Post, PostId, Profile, ProfileId};

use crate::error::ApplicationError;
use crate::ports::ResourcePort;

/// Producers reporting failures in wrapped form
#[derive(Clone)]
pub struct ContextualResources {
    inner: Arc<dyn ResourcePort>,
}

impl fmt::Debug for ContextualResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextualResources").finish_non_exhaustive()
    }
}

impl ContextualResources {
    /// Wrap a raw resource port
    pub fn new(inner: Arc<dyn ResourcePort>) -> Self {
        Self { inner }
    }

    /// Fetch the user profile
    pub async fn fetch_profile(&self) -> Result<Profile, ApplicationError> {
        self.inner
            .fetch_profile()
            .await
            .map_err(|e| ApplicationError::stage_failed(&e))
    }

    /// Fetch the posts owned by a profile
    pub async fn fetch_posts(&self, owner_id: ProfileId) -> Result<Vec<Post>, ApplicationError> {
        self.inner
            .fetch_posts(owner_id)
            .await
            .map_err(|e| ApplicationError::stage_failed(&e))
    }

    /// Fetch the comments on a post
    pub async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApplicationError> {
        self.inner
            .fetch_comments(post_id)
            .await
            .map_err(|e| ApplicationError::stage_failed(&e))
    }
}

#[cfg(test)]
mod tests {
    use domain::ResourceKind;

    use super::*;
    use crate::ports::MockResourcePort;
    use crate::services::test_fixtures::{failure, posts, profile};

    #[tokio::test]
    async fn success_passes_through() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_profile().returning(|| Ok(profile()));
        mock.expect_fetch_posts().returning(|_| Ok(posts()));

        let resources = ContextualResources::new(Arc::new(mock));
        assert_eq!(resources.fetch_profile().await.unwrap(), profile());
        assert_eq!(resources.fetch_posts(ProfileId::new(1)).await.unwrap(), posts());
    }

    #[tokio::test]
    async fn failure_is_wrapped_with_detail() {
        let mut mock = MockResourcePort::new();
        mock.expect_fetch_comments()
            .returning(|_| Err(failure(ResourceKind::Comments)));

        let resources = ContextualResources::new(Arc::new(mock));
        let err = resources.fetch_comments(PostId::new(101)).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to fetch comments: API limit exceeded while fetching comments."
        );
        assert_eq!(err.resource(), Some(ResourceKind::Comments));
    }
}
