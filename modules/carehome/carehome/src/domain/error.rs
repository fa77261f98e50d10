use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("필수 파라미터가 누락되었습니다: {name}")]
    MissingParameter { name: &'static str },

    #[error("잘못된 값입니다 ({field}): {message}")]
    Validation { field: &'static str, message: String },

    #[error("존재하지 않는 계정입니다")]
    AccountNotFound,

    #[error("비밀번호가 틀렸습니다")]
    WrongPassword,

    #[error("로그인이 필요합니다")]
    Unauthenticated,

    #[error("일치하는 계정 정보가 없습니다")]
    RecipientNotFound,

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} already exists: {key}")]
    Conflict { entity: &'static str, key: String },

    #[error("인증 코드를 먼저 요청해 주세요")]
    CodeNotIssued,

    #[error("인증 코드가 만료되었습니다")]
    CodeExpired,

    #[error("인증 코드가 일치하지 않습니다")]
    CodeMismatch,

    #[error("database is not available")]
    Unavailable,

    #[error("mail delivery failed: {0}")]
    Mail(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn missing(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn conflict(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            key: key.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for failures where the stored pool should be dropped and re-created.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Self::Database(sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_))
        )
    }
}
