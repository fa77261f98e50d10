//! Output ports (interfaces) that the domain layer uses.

use async_trait::async_trait;
use carehome_sdk::UserInfo;
use chrono::{DateTime, Utc};

use super::error::DomainError;

/// Wall clock, injectable so expiry can be tested.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Delivers password-reset codes.
#[async_trait]
pub trait CodeMailer: Send + Sync {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DomainError>;
}

/// Identity a verification code is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResetKey {
    pub ancd: String,
    pub uid: String,
    pub email: String,
}

impl ResetKey {
    /// Emails compare case-insensitively.
    #[must_use]
    pub fn new(ancd: &str, uid: &str, email: &str) -> Self {
        Self {
            ancd: ancd.to_owned(),
            uid: uid.to_owned(),
            email: email.to_ascii_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of presenting a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    /// Matched; the code has been consumed.
    Verified,
    NotIssued,
    /// Past its expiry; the code has been dropped.
    Expired,
    /// Wrong code; the issued code stays valid.
    Mismatch,
}

/// Holds issued verification codes.
///
/// `consume` must be atomic per key so a code verifies at most once.
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    async fn issue(&self, key: ResetKey, code: IssuedCode);

    async fn revoke(&self, key: &ResetKey);

    async fn consume(&self, key: &ResetKey, presented: &str, now: DateTime<Utc>) -> CodeCheck;

    /// Drops every expired entry and returns how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserInfo,
    pub expires_at: DateTime<Utc>,
}

/// Login sessions keyed by the opaque `auth_token`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: Session);

    /// Live session for `token`; expired sessions are dropped on lookup.
    async fn get(&self, token: &str, now: DateTime<Utc>) -> Option<Session>;

    async fn remove(&self, token: &str) -> bool;

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}
