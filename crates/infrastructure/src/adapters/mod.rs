//! Adapters implementing application ports

mod fixture_set;
mod simulated_resource_adapter;

pub use fixture_set::FixtureSet;
pub use simulated_resource_adapter::SimulatedResourceAdapter;
