//! Demonstration driver settings

use std::time::Duration;

use domain::{PostId, ProfileId};
use serde::{Deserialize, Serialize};

/// How the `demo` command sequences its runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Owner id the parallel strategy requests posts for
    #[serde(default = "default_parallel_owner_id")]
    pub parallel_owner_id: u64,

    /// Post id the parallel strategy requests comments for
    #[serde(default = "default_parallel_post_id")]
    pub parallel_post_id: u64,

    /// Await each run before starting the next
    ///
    /// When false, runs are started on a fixed schedule instead and may
    /// interleave if a spacing is shorter than the run it follows.
    #[serde(default = "default_await_completion")]
    pub await_completion: bool,

    /// Delay between the sequential and parallel runs
    #[serde(default = "default_sequential_spacing_ms")]
    pub sequential_spacing_ms: u64,

    /// Delay between the parallel and resilient runs
    #[serde(default = "default_parallel_spacing_ms")]
    pub parallel_spacing_ms: u64,
}

const fn default_parallel_owner_id() -> u64 {
    1
}

const fn default_parallel_post_id() -> u64 {
    101
}

const fn default_await_completion() -> bool {
    true
}

const fn default_sequential_spacing_ms() -> u64 {
    3500
}

const fn default_parallel_spacing_ms() -> u64 {
    1500
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            parallel_owner_id: default_parallel_owner_id(),
            parallel_post_id: default_parallel_post_id(),
            await_completion: default_await_completion(),
            sequential_spacing_ms: default_sequential_spacing_ms(),
            parallel_spacing_ms: default_parallel_spacing_ms(),
        }
    }
}

impl DemoConfig {
    /// Fixed ids for the parallel fan-out
    pub const fn parallel_targets(&self) -> (ProfileId, PostId) {
        (
            ProfileId::new(self.parallel_owner_id),
            PostId::new(self.parallel_post_id),
        )
    }

    /// Delay after the sequential run
    pub const fn sequential_spacing(&self) -> Duration {
        Duration::from_millis(self.sequential_spacing_ms)
    }

    /// Delay after the parallel run
    pub const fn parallel_spacing(&self) -> Duration {
        Duration::from_millis(self.parallel_spacing_ms)
    }
}
