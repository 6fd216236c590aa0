//! Latency simulation port

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the calling flow to model I/O wait
///
/// Implementations must yield to the scheduler rather than block, so other
/// ready flows keep running during the wait. A zero duration is valid and
/// resumes at the next scheduling opportunity.
#[async_trait]
pub trait LatencyPort: Send + Sync {
    /// Wait for `duration`
    async fn wait(&self, duration: Duration);
}
