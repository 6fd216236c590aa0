//! Comment entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{CommentId, PostId};

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier
    pub id: CommentId,
    /// The post this comment belongs to
    pub post_id: PostId,
    /// Comment text
    pub content: String,
}

impl Comment {
    /// Create a new comment
    #[must_use]
    pub fn new(id: CommentId, post_id: PostId, content: impl Into<String>) -> Self {
        Self {
            id,
            post_id,
            content: content.into(),
        }
    }
}
