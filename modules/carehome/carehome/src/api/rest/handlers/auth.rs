use axum::Extension;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};

use crate::api::rest::cookies::{AUTH_COOKIE, CookiePolicy, USER_COOKIE, read_cookie};
use crate::api::rest::dto::{Login, LoginRequest, UserRow};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::ApiJson;
use crate::domain::error::DomainError;
use crate::domain::service::AppServices;

/// POST /api/auth/login
///
/// Sets `auth_token` (session token) and `user_info` (URL-encoded JSON of
/// the returned user fields).
#[tracing::instrument(skip_all)]
pub async fn login(
    Extension(svc): Extension<AppServices>,
    Extension(policy): Extension<CookiePolicy>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let login = Login::try_from(body)?;
    let outcome = svc
        .auth
        .login(&login.ancd, &login.uid, &login.password)
        .await?;

    let user = UserRow::from(outcome.user);
    let user_json = serde_json::to_string(&user)
        .map_err(|e| DomainError::internal(format!("user_info encoding: {e}")))?;

    let cookies = AppendHeaders([
        (SET_COOKIE, policy.render(AUTH_COOKIE, &outcome.token)?),
        (
            SET_COOKIE,
            policy.render(USER_COOKIE, &urlencoding::encode(&user_json))?,
        ),
    ]);
    Ok((cookies, envelope::ok_with_message(user, "로그인 성공")))
}

/// GET /api/auth/me
#[tracing::instrument(skip_all)]
pub async fn me(
    Extension(svc): Extension<AppServices>,
    headers: HeaderMap,
) -> ApiResult<JsonEnvelope<UserRow>> {
    let token = read_cookie(&headers, AUTH_COOKIE).ok_or(DomainError::Unauthenticated)?;
    let user = svc.auth.current(&token).await?;
    Ok(envelope::ok(user.into()))
}

/// POST /api/auth/logout - always clears both cookies.
#[tracing::instrument(skip_all)]
pub async fn logout(
    Extension(svc): Extension<AppServices>,
    Extension(policy): Extension<CookiePolicy>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    if let Some(token) = read_cookie(&headers, AUTH_COOKIE) {
        svc.auth.logout(&token).await;
    }
    let cookies = AppendHeaders([
        (SET_COOKIE, policy.clear(AUTH_COOKIE)?),
        (SET_COOKIE, policy.clear(USER_COOKIE)?),
    ]);
    Ok((cookies, envelope::done("로그아웃되었습니다")))
}
