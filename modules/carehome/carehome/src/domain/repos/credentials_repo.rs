use async_trait::async_trait;
use carehome_sdk::UserInfo;

use crate::domain::error::DomainError;

/// Account row as stored by the facility database (plaintext password).
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub user: UserInfo,
    pub password: String,
}

impl std::fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredential")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read access to login accounts (`F00110`).
#[async_trait]
pub trait CredentialsRepository: Send + Sync {
    async fn find(&self, ancd: &str, uid: &str) -> Result<Option<StoredCredential>, DomainError>;
}
