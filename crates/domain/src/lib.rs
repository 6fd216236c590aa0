//! Domain layer for chainfetch
//!
//! Contains the fetched resource records, identifiers, and the single
//! simulated fetch failure kind shared by every producer and strategy.
//! This layer has no runtime dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, FetchError, FetchOutcome};
pub use value_objects::*;
