//! User profile entity
//!
//! The root of every retrieval chain.

use serde::{Deserialize, Serialize};

use crate::value_objects::{EmailAddress, ProfileId};

/// A user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier
    id: ProfileId,
    /// Display name
    name: String,
    /// Contact email
    email: EmailAddress,
}

impl Profile {
    /// Create a new profile
    #[must_use]
    pub fn new(id: ProfileId, name: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            id,
            name: name.into(),
            email,
        }
    }

    /// Get the profile ID
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Get the display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the contact email
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}
