//! Simulated network latency.
//!
//! Every store call awaits its latency strategy before touching state. This
//! is the only place the simulated backend suspends, so tests control the
//! whole concurrency model by picking a strategy and, where delays are real,
//! running on tokio's paused clock.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

/// Latency of entity-store operations.
pub const STORE_LATENCY: Duration = Duration::from_millis(300);

/// Latency of identity-store operations.
pub const AUTH_LATENCY: Duration = Duration::from_millis(500);

/// Strategy deciding how long one simulated call takes.
#[async_trait]
pub trait Latency: Send + Sync + core::fmt::Debug {
    /// Suspend for the duration of one simulated call.
    async fn wait(&self);
}

pub type SharedLatency = Arc<dyn Latency>;

/// Constant delay per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency(Duration);

impl FixedLatency {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

#[async_trait]
impl Latency for FixedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// No delay. Calls still yield once, so they remain suspension points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {
        tokio::task::yield_now().await;
    }
}

/// Pops one queued delay per call, falling back to a fixed delay when the
/// queue is empty.
///
/// Used to make overlapping calls resolve in a chosen order.
#[derive(Debug, Default)]
pub struct ScriptedLatency {
    queue: Mutex<VecDeque<Duration>>,
    fallback: Duration,
}

impl ScriptedLatency {
    pub fn new(fallback: Duration) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback,
        }
    }

    /// Queue the delay for the next unscripted call.
    pub fn push(&self, delay: Duration) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(delay);
    }

    fn next_delay(&self) -> Duration {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

#[async_trait]
impl Latency for ScriptedLatency {
    async fn wait(&self) {
        let delay = self.next_delay();
        tokio::time::sleep(delay).await;
    }
}
