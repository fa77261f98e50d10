use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::ports::{CodeCheck, IssuedCode, ResetKey, VerificationCodeStore};

/// Verification codes held in process memory; lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCodeStore {
    codes: DashMap<ResetKey, IssuedCode>,
}

impl InMemoryCodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[async_trait]
impl VerificationCodeStore for InMemoryCodeStore {
    async fn issue(&self, key: ResetKey, code: IssuedCode) {
        // A new request replaces any code still outstanding for the key
        self.codes.insert(key, code);
    }

    async fn revoke(&self, key: &ResetKey) {
        self.codes.remove(key);
    }

    async fn consume(&self, key: &ResetKey, presented: &str, now: DateTime<Utc>) -> CodeCheck {
        // The entry guard holds the shard lock, so check-and-remove is atomic
        match self.codes.entry(key.clone()) {
            Entry::Vacant(_) => CodeCheck::NotIssued,
            Entry::Occupied(entry) => {
                if entry.get().expires_at <= now {
                    entry.remove();
                    CodeCheck::Expired
                } else if entry.get().code != presented {
                    CodeCheck::Mismatch
                } else {
                    entry.remove();
                    CodeCheck::Verified
                }
            }
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.codes.retain(|_, issued| {
            let live = issued.expires_at > now;
            if !live {
                removed += 1;
            }
            live
        });
        removed
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::sync::Arc;

    use chrono::{Duration, TimeZone};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn key() -> ResetKey {
        ResetKey::new("A001", "nurse1", "Nurse1@Example.org")
    }

    fn issued(code: &str, ttl: Duration) -> IssuedCode {
        IssuedCode {
            code: code.to_owned(),
            expires_at: t0() + ttl,
        }
    }

    #[tokio::test]
    async fn lifecycle_issue_mismatch_verify() {
        let store = InMemoryCodeStore::new();
        assert_eq!(store.consume(&key(), "123456", t0()).await, CodeCheck::NotIssued);

        store.issue(key(), issued("123456", Duration::minutes(10))).await;
        assert_eq!(store.consume(&key(), "654321", t0()).await, CodeCheck::Mismatch);
        assert_eq!(store.len(), 1);

        let lower = ResetKey::new("A001", "nurse1", "nurse1@example.org");
        assert_eq!(store.consume(&lower, "123456", t0()).await, CodeCheck::Verified);
        assert_eq!(store.consume(&key(), "123456", t0()).await, CodeCheck::NotIssued);
    }

    #[tokio::test]
    async fn expired_code_is_dropped_on_lookup() {
        let store = InMemoryCodeStore::new();
        store.issue(key(), issued("123456", Duration::minutes(10))).await;

        let later = t0() + Duration::minutes(10);
        assert_eq!(store.consume(&key(), "123456", later).await, CodeCheck::Expired);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn reissue_replaces_previous_code() {
        let store = InMemoryCodeStore::new();
        store.issue(key(), issued("111111", Duration::minutes(10))).await;
        store.issue(key(), issued("222222", Duration::minutes(10))).await;

        assert_eq!(store.consume(&key(), "111111", t0()).await, CodeCheck::Mismatch);
        assert_eq!(store.consume(&key(), "222222", t0()).await, CodeCheck::Verified);
    }

    #[tokio::test]
    async fn sweep_removes_only_expired() {
        let store = InMemoryCodeStore::new();
        store.issue(key(), issued("111111", Duration::minutes(1))).await;
        store
            .issue(
                ResetKey::new("A001", "nurse2", "n2@example.org"),
                issued("222222", Duration::minutes(30)),
            )
            .await;

        assert_eq!(store.purge_expired(t0() + Duration::minutes(5)).await, 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_verification_succeeds_once() {
        let store = Arc::new(InMemoryCodeStore::new());
        store.issue(key(), issued("123456", Duration::minutes(10))).await;

        let attempts: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.consume(&key(), "123456", t0()).await })
            })
            .collect();

        let mut verified = 0;
        for attempt in attempts {
            if attempt.await.unwrap() == CodeCheck::Verified {
                verified += 1;
            }
        }
        assert_eq!(verified, 1);
    }
}
