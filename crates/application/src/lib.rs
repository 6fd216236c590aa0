//! Application layer - Retrieval strategies and orchestration
//!
//! Contains the port definitions the simulated producers implement and the
//! three strategies that chain, fan out, or degrade over them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
