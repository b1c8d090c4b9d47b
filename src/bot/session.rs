//! One conversation: a user, their own store, and the query log.

use super::dispatch::dispatch;
use super::models::{Query, Reply};
use crate::store::DomainStore;
use crate::user::User;
use chrono::Local;
use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub store: DomainStore,
    queries: Vec<Query>,
    last_active: Instant,
}

impl Session {
    /// Opens a session for `name` on a freshly seeded store.
    pub fn new(name: &str) -> Self {
        let user = User::new(Uuid::new_v4().simple().to_string(), name);
        Self::with_user(user, DomainStore::seeded())
    }

    pub fn with_user(user: User, store: DomainStore) -> Self {
        Self {
            user,
            store,
            queries: Vec::new(),
            last_active: Instant::now(),
        }
    }

    /// Logs the query and answers it.
    pub fn respond(&mut self, text: &str) -> Reply {
        self.last_active = Instant::now();
        self.queries.push(Query {
            user_id: self.user.id.clone(),
            content: text.to_string(),
            timestamp: Local::now(),
        });
        Reply::now(dispatch(text, &mut self.user, &mut self.store))
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Time since the session was opened or last answered a query.
    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }
}
