//! Fetch observers - Implement FetchObserver
//!
//! - `TracingObserver`: one log line per event
//! - `RecordingObserver`: ordered in-memory timeline
//! - `FanoutObserver`: forwards to several observers

use std::fmt;
use std::sync::Arc;

use application::ports::{FetchEvent, FetchObserver};
use domain::ResourceKind;
use parking_lot::Mutex;
use tracing::{info, warn};

/// Logs every event through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_event(&self, event: &FetchEvent) {
        match event {
            FetchEvent::Started { resource } => info!(%resource, "Fetching"),
            FetchEvent::Succeeded { resource, items } => info!(%resource, items, "Fetched"),
            FetchEvent::Failed { resource, reason } => warn!(%resource, %reason, "Fetch failed"),
            FetchEvent::Skipped { resource, reason } => info!(%resource, %reason, "Fetch skipped"),
        }
    }
}

/// Keeps every event in arrival order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<FetchEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<FetchEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// How many times a producer was invoked
    pub fn started_count(&self, resource: ResourceKind) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, FetchEvent::Started { resource: r } if *r == resource))
            .count()
    }
}

impl FetchObserver for RecordingObserver {
    fn on_event(&self, event: &FetchEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Forwards each event to every inner observer, in order
#[derive(Clone, Default)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn FetchObserver>>,
}

impl fmt::Debug for FanoutObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FanoutObserver {
    /// Create an empty fanout
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer
    #[must_use]
    pub fn with(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

impl FetchObserver for FanoutObserver {
    fn on_event(&self, event: &FetchEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
