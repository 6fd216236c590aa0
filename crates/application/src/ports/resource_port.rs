//! Resource producer port
//!
//! Defines the interface for the three unreliable fetch operations.

use async_trait::async_trait;
use domain::{Comment, FetchOutcome, Post, PostId, Profile, ProfileId};
#[cfg(test)]
use mockall::automock;

/// Port for the profile/posts/comments producers
///
/// Every call resolves exactly once, to either the fixture payload or a
/// [`domain::FetchError`]. Ids are accepted as given; producers do not check
/// that they refer to anything.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResourcePort: Send + Sync {
    /// Fetch the user profile
    async fn fetch_profile(&self) -> FetchOutcome<Profile>;

    /// Fetch the posts owned by a profile, in display order
    async fn fetch_posts(&self, owner_id: ProfileId) -> FetchOutcome<Vec<Post>>;

    /// Fetch the comments on a post, in display order
    async fn fetch_comments(&self, post_id: PostId) -> FetchOutcome<Vec<Comment>>;
}
