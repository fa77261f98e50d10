//! Verification-code delivery.

use std::sync::Arc;

use chrono::Duration;

use crate::config::SmtpConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::CodeMailer;

mod log_mailer;
mod smtp;

pub use log_mailer::LogMailer;
pub use smtp::SmtpMailer;

/// SMTP when fully configured, otherwise the logging fallback.
pub fn from_config(cfg: &SmtpConfig, code_ttl: Duration) -> Result<Arc<dyn CodeMailer>, DomainError> {
    if cfg.is_configured() {
        Ok(Arc::new(SmtpMailer::new(cfg, code_ttl)?))
    } else {
        tracing::warn!("SMTP is not configured; verification codes will be logged");
        Ok(Arc::new(LogMailer))
    }
}

fn body(code: &str, code_ttl: Duration) -> String {
    format!(
        "비밀번호 찾기 인증 코드입니다.\n\n인증 코드: {code}\n\n{}분 이내에 입력해 주세요.",
        code_ttl.num_minutes()
    )
}

const SUBJECT: &str = "[요양기관 관리] 비밀번호 찾기 인증 코드";
