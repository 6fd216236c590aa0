//! Failure decision port

use domain::ResourceKind;

/// Decides, per producer invocation, whether that invocation fails
///
/// Each call is an independent trial. Implementations are consulted from
/// interleaved flows and must stay consistent under that.
pub trait FailureDecisionPort: Send + Sync {
    /// Whether the current invocation of `resource` should fail
    fn should_fail(&self, resource: ResourceKind) -> bool;
}
