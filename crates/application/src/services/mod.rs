//! Application services - Retrieval strategies

mod contextual_resources;
mod parallel_strategy;
mod resilient_chain;
mod retrieval_service;
mod sequential_strategy;
#[cfg(test)]
mod test_fixtures;

pub use contextual_resources::ContextualResources;
pub use parallel_strategy::{DEFAULT_OWNER_ID, DEFAULT_POST_ID, ParallelReport, ParallelStrategy};
pub use resilient_chain::{ChainReport, ResilientChainStrategy, StageRecord, StageStatus};
pub use retrieval_service::{RetrievalService, RunReport, StrategyKind};
pub use sequential_strategy::{SequentialReport, SequentialStrategy};
