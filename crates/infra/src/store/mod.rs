//! Simulated backend collections.
//!
//! Each store is a cheap-to-clone handle over shared in-memory state. Calls
//! wait for their latency first and then do all their work under a single
//! lock acquisition, so no snapshot is ever held across a suspension point.

pub mod entity_store;
pub mod identity_store;

pub use entity_store::EntityStore;
pub use identity_store::IdentityStore;

use eduspot_core::DomainError;

pub(crate) fn poisoned(kind: &str) -> DomainError {
    DomainError::operation_failed(format!("{kind} store lock poisoned"))
}
