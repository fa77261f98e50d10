//! Extractors that reject with the failure envelope.

use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::cookies::{AUTH_COOKIE, read_cookie};
use super::error::ApiError;
use crate::domain::error::DomainError;
use crate::domain::service::AuthService;

/// `axum::Json` with envelope rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with envelope rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Rejects requests without a live `auth_token` session.
///
/// The session user is stored as a request extension for handlers.
pub async fn require_session(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = read_cookie(req.headers(), AUTH_COOKIE) else {
        return ApiError::from(DomainError::Unauthenticated).into_response();
    };
    match auth.current(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
