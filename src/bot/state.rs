//! Shared state for the HTTP chat surface

use super::session::Session;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// One [`Session`] per session id. Sessions never share a store.
#[derive(Default)]
pub struct AppState {
    /// In-memory sessions, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops sessions idle for at least `ttl`. Returns how many were dropped.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.idle_for() < ttl);
        before.saturating_sub(self.sessions.len())
    }
}
