//! Outcome of the startup database bootstrap.
//!
//! The server accepts requests before the bootstrap finishes. The result is
//! recorded here and surfaced by `/health` instead of gating traffic.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    /// Bootstrap still running.
    Pending,
    /// Database reachable and schema in place.
    Ready,
    /// Bootstrap failed; requests that touch the database will fail.
    Failed,
}

const PENDING: u8 = 0;
const READY: u8 = 1;
const FAILED: u8 = 2;

/// Shared, cheaply cloneable readiness flag.
#[derive(Debug, Clone)]
pub struct Readiness(Arc<AtomicU8>);

impl Readiness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU8::new(PENDING)))
    }

    /// A flag that already reports [`ReadinessState::Ready`].
    pub fn ready() -> Self {
        let readiness = Self::new();
        readiness.mark_ready();
        readiness
    }

    pub fn mark_ready(&self) {
        self.0.store(READY, Ordering::SeqCst);
    }

    pub fn mark_failed(&self) {
        self.0.store(FAILED, Ordering::SeqCst);
    }

    pub fn state(&self) -> ReadinessState {
        match self.0.load(Ordering::SeqCst) {
            READY => ReadinessState::Ready,
            FAILED => ReadinessState::Failed,
            _ => ReadinessState::Pending,
        }
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        assert_eq!(Readiness::new().state(), ReadinessState::Pending);
    }

    #[test]
    fn clones_share_state() {
        let readiness = Readiness::new();
        let observer = readiness.clone();

        readiness.mark_failed();
        assert_eq!(observer.state(), ReadinessState::Failed);

        readiness.mark_ready();
        assert_eq!(observer.state(), ReadinessState::Ready);
    }
}
