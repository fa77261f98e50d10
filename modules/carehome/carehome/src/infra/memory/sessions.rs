use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::ports::{Session, SessionStore};

/// Login sessions held in process memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: String, session: Session) {
        self.sessions.insert(token, session);
    }

    async fn get(&self, token: &str, now: DateTime<Utc>) -> Option<Session> {
        let session = self.sessions.get(token)?.clone();
        if session.expires_at <= now {
            self.sessions.remove(token);
            return None;
        }
        Some(session)
    }

    async fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.sessions.retain(|_, s| {
            let live = s.expires_at > now;
            if !live {
                removed += 1;
            }
            live
        });
        removed
    }
}
