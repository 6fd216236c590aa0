//! Best-effort result of a resilient chain
//!
//! Fields are populated strictly in dependency order: posts only after a
//! profile, comments only after a non-empty post list. An absent profile or
//! an empty list marks a stage that failed or was skipped; it is not an
//! error of the result itself.

use serde::{Deserialize, Serialize};

use super::{Comment, Post, Profile};
use crate::errors::DomainError;
use crate::value_objects::ResourceKind;

/// Partially populated profile/posts/comments triple
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedResult {
    profile: Option<Profile>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl CombinedResult {
    /// A result with every stage missing
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            profile: None,
            posts: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Assemble a result, rejecting fields populated out of dependency order
    pub fn new(
        profile: Option<Profile>,
        posts: Vec<Post>,
        comments: Vec<Comment>,
    ) -> Result<Self, DomainError> {
        if profile.is_none() && !posts.is_empty() {
            return Err(DomainError::OutOfOrder(
                "posts present without a profile".to_string(),
            ));
        }
        if posts.is_empty() && !comments.is_empty() {
            return Err(DomainError::OutOfOrder(
                "comments present without posts".to_string(),
            ));
        }
        Ok(Self {
            profile,
            posts,
            comments,
        })
    }

    /// A result whose profile stage succeeded
    #[must_use]
    pub const fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
            posts: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Attach posts; ignored unless a profile is present
    #[must_use]
    pub fn and_posts(mut self, posts: Vec<Post>) -> Self {
        if self.profile.is_some() {
            self.posts = posts;
        }
        self
    }

    /// Attach comments; ignored unless posts are present
    #[must_use]
    pub fn and_comments(mut self, comments: Vec<Comment>) -> Self {
        if !self.posts.is_empty() {
            self.comments = comments;
        }
        self
    }

    /// The profile, if that stage succeeded
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Posts, empty if the stage failed or was skipped
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Comments on the first post, empty if the stage failed or was skipped
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Whether every stage produced data
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.profile.is_some() && !self.posts.is_empty() && !self.comments.is_empty()
    }

    /// Resources with no data, in dependency order
    #[must_use]
    pub fn missing(&self) -> Vec<ResourceKind> {
        let mut missing = Vec::new();
        if self.profile.is_none() {
            missing.push(ResourceKind::Profile);
        }
        if self.posts.is_empty() {
            missing.push(ResourceKind::Posts);
        }
        if self.comments.is_empty() {
            missing.push(ResourceKind::Comments);
        }
        missing
    }
}
