//! Latency simulators - Implement LatencyPort

use std::time::Duration;

use application::ports::LatencyPort;
use async_trait::async_trait;

/// Waits on the tokio timer, so a paused test clock can skip ahead
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLatency;

#[async_trait]
impl LatencyPort for TokioLatency {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Ignores the requested duration and yields once
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencyPort for NoLatency {
    async fn wait(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
