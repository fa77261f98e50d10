use std::sync::Arc;

use carehome_sdk::UserInfo;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::ports::{Clock, Session, SessionStore};
use crate::domain::repos::CredentialsRepository;

const TOKEN_BYTES: usize = 32;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserInfo,
    pub expires_at: DateTime<Utc>,
}

pub struct AuthService {
    credentials: Arc<dyn CredentialsRepository>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialsRepository>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            sessions,
            clock,
            session_ttl,
        }
    }

    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        ancd: &str,
        uid: &str,
        password: &str,
    ) -> Result<LoginOutcome, DomainError> {
        let Some(stored) = self.credentials.find(ancd, uid).await? else {
            info!("Login rejected: unknown account");
            return Err(DomainError::AccountNotFound);
        };

        if !constant_time_eq(stored.password.as_bytes(), password.as_bytes()) {
            warn!("Login rejected: wrong password");
            return Err(DomainError::WrongPassword);
        }

        let token = new_token();
        let expires_at = self.clock.now() + self.session_ttl;
        self.sessions
            .insert(
                token.clone(),
                Session {
                    user: stored.user.clone(),
                    expires_at,
                },
            )
            .await;

        info!("Login succeeded");
        Ok(LoginOutcome {
            token,
            user: stored.user,
            expires_at,
        })
    }

    /// User behind a live session token.
    pub async fn current(&self, token: &str) -> Result<UserInfo, DomainError> {
        self.sessions
            .get(token, self.clock.now())
            .await
            .map(|s| s.user)
            .ok_or(DomainError::Unauthenticated)
    }

    pub async fn logout(&self, token: &str) {
        if self.sessions.remove(token).await {
            debug!("Session revoked");
        }
    }

    pub async fn purge_expired(&self) -> usize {
        self.sessions.purge_expired(self.clock.now()).await
    }
}

fn new_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_64_hex_chars() {
        let a = new_token();
        let b = new_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn constant_time_eq_matches_plain_equality() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"secrets"));
        assert!(constant_time_eq(b"", b""));
    }
}
