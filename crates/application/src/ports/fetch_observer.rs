//! Diagnostic side channel for producer and strategy activity

use domain::ResourceKind;
use serde::Serialize;

/// Something observable that happened during a retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FetchEvent {
    /// A producer was invoked
    Started { resource: ResourceKind },
    /// A producer resolved with data
    Succeeded { resource: ResourceKind, items: usize },
    /// A producer resolved with a failure
    Failed {
        resource: ResourceKind,
        reason: String,
    },
    /// A strategy skipped a producer because an upstream stage had no data
    Skipped {
        resource: ResourceKind,
        reason: String,
    },
}

impl FetchEvent {
    /// The resource this event concerns
    pub const fn resource(&self) -> ResourceKind {
        match self {
            Self::Started { resource }
            | Self::Succeeded { resource, .. }
            | Self::Failed { resource, .. }
            | Self::Skipped { resource, .. } => *resource,
        }
    }
}

/// Receives [`FetchEvent`]s as they happen
///
/// Called synchronously on the flow that produced the event.
pub trait FetchObserver: Send + Sync {
    /// Handle one event
    fn on_event(&self, event: &FetchEvent);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {
    fn on_event(&self, _event: &FetchEvent) {}
}
