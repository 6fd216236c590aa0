//! Simulated resource adapter - Implements ResourcePort with fixtures
//!
//! Each producer waits its configured latency, then asks the decision source
//! whether to fail. Success returns the fixture payload. Start and settle are
//! reported to the observer.

use std::fmt;
use std::sync::Arc;

use application::ports::{
    FailureDecisionPort, FetchEvent, FetchObserver, LatencyPort, NoopObserver, ResourcePort,
};
use async_trait::async_trait;
use domain::{Comment, FetchOutcome, Post, PostId, Profile, ProfileId, ResourceKind};
use tracing::{debug, instrument, warn};

use super::FixtureSet;
use crate::config::LatencyConfig;

/// Unreliable producers over a fixed fixture set
#[derive(Clone)]
pub struct SimulatedResourceAdapter {
    fixtures: FixtureSet,
    latency: LatencyConfig,
    clock: Arc<dyn LatencyPort>,
    decider: Arc<dyn FailureDecisionPort>,
    observer: Arc<dyn FetchObserver>,
}

impl fmt::Debug for SimulatedResourceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedResourceAdapter")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl SimulatedResourceAdapter {
    /// Create an adapter with the given payloads, wait primitive and decision source
    pub fn new(
        fixtures: FixtureSet,
        latency: LatencyConfig,
        clock: Arc<dyn LatencyPort>,
        decider: Arc<dyn FailureDecisionPort>,
    ) -> Self {
        Self {
            fixtures,
            latency,
            clock,
            decider,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Report producer activity to an observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    async fn produce<T>(
        &self,
        resource: ResourceKind,
        payload: impl FnOnce(&FixtureSet) -> T,
        items: impl FnOnce(&T) -> usize,
    ) -> FetchOutcome<T> {
        self.observer.on_event(&FetchEvent::Started { resource });
        self.clock.wait(self.latency.for_resource(resource)).await;

        if self.decider.should_fail(resource) {
            let err = self.fixtures.failure(resource);
            warn!(%resource, detail = err.detail(), "Simulated fetch failed");
            self.observer.on_event(&FetchEvent::Failed {
                resource,
                reason: err.reason(),
            });
            return Err(err);
        }

        let value = payload(&self.fixtures);
        let items = items(&value);
        debug!(%resource, items, "Simulated fetch succeeded");
        self.observer
            .on_event(&FetchEvent::Succeeded { resource, items });
        Ok(value)
    }
}

#[async_trait]
impl ResourcePort for SimulatedResourceAdapter {
    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> FetchOutcome<Profile> {
        self.produce(ResourceKind::Profile, |f| f.profile().clone(), |_| 1)
            .await
    }

    #[instrument(skip(self), fields(%owner_id))]
    async fn fetch_posts(&self, owner_id: ProfileId) -> FetchOutcome<Vec<Post>> {
        // The fixture's owner references stay as configured.
        self.produce(ResourceKind::Posts, |f| f.posts().to_vec(), Vec::len)
            .await
    }

    #[instrument(skip(self), fields(%post_id))]
    async fn fetch_comments(&self, post_id: PostId) -> FetchOutcome<Vec<Comment>> {
        self.produce(ResourceKind::Comments, |f| f.comments_for(post_id), Vec::len)
            .await
    }
}
