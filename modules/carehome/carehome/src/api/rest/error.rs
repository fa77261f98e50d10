//! REST error mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};
use uuid::Uuid;

use super::envelope::ApiEnvelope;
use crate::domain::error::DomainError;

const INTERNAL_MESSAGE: &str = "서버 오류가 발생했습니다";
const UNAVAILABLE_MESSAGE: &str = "데이터베이스를 사용할 수 없습니다";

/// Error response rendered as the failure envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: String) -> Self {
        Self {
            details: Some(details),
            ..Self::new(StatusCode::BAD_REQUEST, message)
        }
    }

    /// Opaque 500: the cause is logged under an incident id, the client
    /// only sees the id.
    fn internal(cause: &DomainError) -> Self {
        let incident = Uuid::new_v4().to_string();
        error!(%incident, error = %cause, "Request failed");
        Self {
            details: Some(incident),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = match &e {
            DomainError::MissingParameter { .. } | DomainError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            DomainError::AccountNotFound
            | DomainError::WrongPassword
            | DomainError::Unauthenticated
            | DomainError::CodeNotIssued
            | DomainError::CodeExpired
            | DomainError::CodeMismatch => StatusCode::UNAUTHORIZED,
            DomainError::NotFound { .. } | DomainError::RecipientNotFound => StatusCode::NOT_FOUND,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::Unavailable => {
                warn!("Database unavailable");
                return Self::new(StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE);
            }
            DomainError::Mail(_) | DomainError::Database(_) | DomainError::Internal(_) => {
                return Self::internal(&e);
            }
        };
        Self::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("요청 본문이 올바르지 않습니다", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("쿼리 파라미터가 올바르지 않습니다", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiEnvelope::failure(self.message, self.details)),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_status_codes() {
        let cases = [
            (DomainError::missing("ancd"), StatusCode::BAD_REQUEST),
            (DomainError::validation("WDT", "bad"), StatusCode::BAD_REQUEST),
            (DomainError::AccountNotFound, StatusCode::UNAUTHORIZED),
            (DomainError::WrongPassword, StatusCode::UNAUTHORIZED),
            (DomainError::CodeExpired, StatusCode::UNAUTHORIZED),
            (DomainError::RecipientNotFound, StatusCode::NOT_FOUND),
            (DomainError::not_found("resident", "A001/1"), StatusCode::NOT_FOUND),
            (DomainError::conflict("employee", "A001/E1"), StatusCode::CONFLICT),
            (DomainError::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::Mail("x".to_owned()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn internal_errors_are_opaque() {
        let err = ApiError::from(DomainError::internal("password=hunter2 at db.internal"));
        assert_eq!(err.message, INTERNAL_MESSAGE);
        let incident = err.details.unwrap_or_default();
        assert!(Uuid::parse_str(&incident).is_ok());
        assert!(!incident.contains("hunter2"));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = ApiError::from(DomainError::WrongPassword);
        assert_eq!(err.message, "비밀번호가 틀렸습니다");
        assert!(err.details.is_none());
    }
}
