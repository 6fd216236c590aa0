//! Producer payloads and failure details

use domain::{
    CommentId, DomainError, EmailAddress, Post, PostId, Profile, ProfileId, ResourceKind,
};
use serde::{Deserialize, Serialize};

use crate::adapters::FixtureSet;

/// The profile every successful profile fetch returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFixture {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// One post in the posts fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFixture {
    pub id: u64,
    pub owner_id: u64,
    pub title: String,
}

/// One comment template; the post id is supplied per call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFixture {
    pub id: u64,
    pub content: String,
}

/// Underlying reason attached to each injected failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetails {
    #[serde(default = "default_profile_detail")]
    pub profile: String,
    #[serde(default = "default_posts_detail")]
    pub posts: String,
    #[serde(default = "default_comments_detail")]
    pub comments: String,
}

fn default_profile_detail() -> String {
    "Network issue while fetching user profile.".to_string()
}

fn default_posts_detail() -> String {
    "Database timeout while fetching posts.".to_string()
}

fn default_comments_detail() -> String {
    "API limit exceeded while fetching comments.".to_string()
}

impl Default for FailureDetails {
    fn default() -> Self {
        Self {
            profile: default_profile_detail(),
            posts: default_posts_detail(),
            comments: default_comments_detail(),
        }
    }
}

impl FailureDetails {
    /// Detail for one resource
    pub fn for_resource(&self, resource: ResourceKind) -> &str {
        match resource {
            ResourceKind::Profile => &self.profile,
            ResourceKind::Posts => &self.posts,
            ResourceKind::Comments => &self.comments,
        }
    }
}

/// Payloads returned by the simulated producers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureConfig {
    #[serde(default = "default_profile")]
    pub profile: ProfileFixture,

    #[serde(default = "default_posts")]
    pub posts: Vec<PostFixture>,

    #[serde(default = "default_comments")]
    pub comments: Vec<CommentFixture>,

    #[serde(default)]
    pub failure_details: FailureDetails,
}

fn default_profile() -> ProfileFixture {
    ProfileFixture {
        id: 1,
        name: "Erin".to_string(),
        email: "erin@example.com".to_string(),
    }
}

fn default_posts() -> Vec<PostFixture> {
    vec![
        PostFixture {
            id: 101,
            owner_id: 1,
            title: "First Post".to_string(),
        },
        PostFixture {
            id: 102,
            owner_id: 1,
            title: "Second Post".to_string(),
        },
    ]
}

fn default_comments() -> Vec<CommentFixture> {
    vec![
        CommentFixture {
            id: 201,
            content: "I liked your post!".to_string(),
        },
        CommentFixture {
            id: 202,
            content: "Good job.".to_string(),
        },
    ]
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            posts: default_posts(),
            comments: default_comments(),
            failure_details: FailureDetails::default(),
        }
    }
}

impl FixtureConfig {
    /// Build the typed fixture set, validating the profile email
    pub fn to_fixture_set(&self) -> Result<FixtureSet, DomainError> {
        let profile = Profile::new(
            ProfileId::new(self.profile.id),
            self.profile.name.clone(),
            EmailAddress::new(self.profile.email.clone())?,
        );
        let posts = self
            .posts
            .iter()
            .map(|p| Post::new(PostId::new(p.id), ProfileId::new(p.owner_id), p.title.clone()))
            .collect();
        let comments = self
            .comments
            .iter()
            .map(|c| (CommentId::new(c.id), c.content.clone()))
            .collect();

        Ok(FixtureSet::new(
            profile,
            posts,
            comments,
            self.failure_details.clone(),
        ))
    }
}
