//! Domain error types.
//!
//! These errors represent invalid route construction in the domain layer.
//! Route search itself never fails: an unreachable destination is simply
//! an empty result.

use super::Station;

/// Domain-level errors for route construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptyRoute,

    /// Consecutive segments don't connect
    #[error("segments do not connect: expected a departure from {expected}, found {found}")]
    Discontiguous { expected: Station, found: Station },
}
