//! Failure injection for the simulated producers.
//!
//! Every producer call asks a [`FailureDecisionPort`] whether it should fail.
//! Two implementations live here:
//!
//! - [`FaultInjector`]: independent random decisions at a configurable rate
//!   (0.3 by default), optionally seeded for reproducible runs
//! - [`ScriptedFaults`]: deterministic decisions for tests and demos
//!
//! # Example
//!
//! ```ignore
//! use infrastructure::chaos::{FaultInjector, FaultPolicy};
//!
//! let injector = FaultInjector::seeded(FaultPolicy::default(), 42);
//! let fail = injector.should_fail(ResourceKind::Posts);
//! ```
//!
//! [`FailureDecisionPort`]: application::ports::FailureDecisionPort

mod chaos_context;
mod fault_injector;
mod fault_policy;
mod scripted_faults;

pub use chaos_context::{ChaosContext, ChaosStats};
pub use fault_injector::FaultInjector;
pub use fault_policy::{DEFAULT_FAULT_RATE, FaultPolicy};
pub use scripted_faults::ScriptedFaults;
