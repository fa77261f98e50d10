use std::sync::Arc;

use chrono::Duration;
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::ports::{
    Clock, CodeCheck, CodeMailer, IssuedCode, ResetKey, VerificationCodeStore,
};
use crate::domain::repos::CredentialsRepository;

/// Forgot-password flow: issue a mailed 6-digit code, then trade it
/// once for the stored password.
pub struct PasswordResetService {
    credentials: Arc<dyn CredentialsRepository>,
    codes: Arc<dyn VerificationCodeStore>,
    mailer: Arc<dyn CodeMailer>,
    clock: Arc<dyn Clock>,
    code_ttl: Duration,
}

impl PasswordResetService {
    pub fn new(
        credentials: Arc<dyn CredentialsRepository>,
        codes: Arc<dyn VerificationCodeStore>,
        mailer: Arc<dyn CodeMailer>,
        clock: Arc<dyn Clock>,
        code_ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            codes,
            mailer,
            clock,
            code_ttl,
        }
    }

    #[instrument(skip(self, email))]
    pub async fn send_code(&self, ancd: &str, uid: &str, email: &str) -> Result<(), DomainError> {
        let email = email.trim();
        let matches = self
            .credentials
            .find(ancd, uid)
            .await?
            .and_then(|c| c.user.email)
            .is_some_and(|stored| stored.trim().eq_ignore_ascii_case(email));
        if !matches {
            info!("No account matches the reset request");
            return Err(DomainError::RecipientNotFound);
        }

        let key = ResetKey::new(ancd, uid, email);
        let code = format!("{:06}", rand::rng().random_range(0..1_000_000u32));
        let expires_at = self.clock.now() + self.code_ttl;
        self.codes
            .issue(
                key.clone(),
                IssuedCode {
                    code: code.clone(),
                    expires_at,
                },
            )
            .await;

        if let Err(e) = self.mailer.send_code(email, &code).await {
            warn!(error = %e, "Revoking verification code after failed delivery");
            self.codes.revoke(&key).await;
            return Err(e);
        }

        info!(%expires_at, "Verification code issued");
        Ok(())
    }

    /// Consumes the code and returns the account's stored password.
    #[instrument(skip(self, email, code))]
    pub async fn verify(
        &self,
        ancd: &str,
        uid: &str,
        email: &str,
        code: &str,
    ) -> Result<String, DomainError> {
        let key = ResetKey::new(ancd, uid, email.trim());
        match self.codes.consume(&key, code.trim(), self.clock.now()).await {
            CodeCheck::Verified => {}
            CodeCheck::NotIssued => return Err(DomainError::CodeNotIssued),
            CodeCheck::Expired => return Err(DomainError::CodeExpired),
            CodeCheck::Mismatch => return Err(DomainError::CodeMismatch),
        }

        let stored = self
            .credentials
            .find(ancd, uid)
            .await?
            .ok_or(DomainError::RecipientNotFound)?;
        info!("Verification code accepted");
        Ok(stored.password)
    }

    pub async fn purge_expired(&self) -> usize {
        self.codes.purge_expired(self.clock.now()).await
    }
}
