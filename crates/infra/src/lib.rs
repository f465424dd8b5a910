//! Simulated backend for the EduSpot console.
//!
//! In-memory stores with injectable latency. All state lives behind
//! `Arc<RwLock<_>>` so handles can be cloned into concurrent tasks.

pub mod backend;
pub mod latency;
pub mod seed;
pub mod store;

pub use backend::{Backend, BackendLatency};
pub use latency::{
    AUTH_LATENCY, FixedLatency, Latency, NoLatency, STORE_LATENCY, ScriptedLatency, SharedLatency,
};
pub use store::{EntityStore, IdentityStore};
