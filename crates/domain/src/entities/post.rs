//! Post entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{PostId, ProfileId};

/// A post owned by a profile
///
/// Posts are produced as ordered sequences; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Owning profile
    pub owner_id: ProfileId,
    /// Post title
    pub title: String,
}

impl Post {
    /// Create a new post
    #[must_use]
    pub fn new(id: PostId, owner_id: ProfileId, title: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
        }
    }
}
