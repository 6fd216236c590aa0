//! Application-level errors

use domain::{FetchError, ResourceKind};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A fail-fast strategy aborted on a raw producer failure
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A producer failure in wrapped form (`"Failed to fetch posts: <detail>"`)
    #[error("{message}")]
    StageFailed {
        resource: ResourceKind,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Wrap a raw producer failure with its underlying detail
    pub fn stage_failed(err: &FetchError) -> Self {
        Self::StageFailed {
            resource: err.resource(),
            message: err.wrapped_message(),
        }
    }

    /// The resource whose fetch failed, if this is a fetch failure
    pub const fn resource(&self) -> Option<ResourceKind> {
        match self {
            Self::Fetch(err) => Some(err.resource()),
            Self::StageFailed { resource, .. } => Some(*resource),
            Self::Configuration(_) => None,
        }
    }
}
