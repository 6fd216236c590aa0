//! Domain-level errors

use thiserror::Error;

use crate::value_objects::ResourceKind;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// A combined result was assembled out of dependency order
    #[error("Out of order result: {0}")]
    OutOfOrder(String),
}

/// A simulated fetch failure
///
/// The only failure kind a producer can report. `Display` yields the raw
/// reason (`"Failed to fetch posts"`); [`FetchError::wrapped_message`]
/// yields the composed form including the underlying detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch {resource}")]
pub struct FetchError {
    resource: ResourceKind,
    detail: String,
}

impl FetchError {
    /// Create a failure for the given resource with an underlying detail
    pub fn new(resource: ResourceKind, detail: impl Into<String>) -> Self {
        Self {
            resource,
            detail: detail.into(),
        }
    }

    /// The resource whose fetch failed
    pub const fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// The underlying detail (e.g. "Database timeout while fetching posts.")
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The raw reason, as reported by fail-fast strategies
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// `"Failed to fetch <resource>: <detail>"`
    pub fn wrapped_message(&self) -> String {
        format!("Failed to fetch {}: {}", self.resource, self.detail)
    }
}

/// Outcome of a single producer invocation or fail-fast strategy run
pub type FetchOutcome<T> = Result<T, FetchError>;
