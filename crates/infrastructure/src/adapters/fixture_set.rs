//! Typed payloads handed out by the simulated producers

use domain::{Comment, CommentId, FetchError, Post, PostId, Profile, ResourceKind};

use crate::config::FailureDetails;

/// Constant payloads; every call returns fresh copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    profile: Profile,
    posts: Vec<Post>,
    comments: Vec<(CommentId, String)>,
    failure_details: FailureDetails,
}

impl FixtureSet {
    /// Assemble a fixture set from typed parts
    pub fn new(
        profile: Profile,
        posts: Vec<Post>,
        comments: Vec<(CommentId, String)>,
        failure_details: FailureDetails,
    ) -> Self {
        Self {
            profile,
            posts,
            comments,
            failure_details,
        }
    }

    /// The profile fixture
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The posts fixture; owner references are fixed, not derived from a request
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Comments bound to `post_id`
    pub fn comments_for(&self, post_id: PostId) -> Vec<Comment> {
        self.comments
            .iter()
            .map(|(id, content)| Comment::new(*id, post_id, content.clone()))
            .collect()
    }

    /// The failure a producer reports when told to fail
    pub fn failure(&self, resource: ResourceKind) -> FetchError {
        FetchError::new(resource, self.failure_details.for_resource(resource))
    }
}
