use axum::Extension;

use crate::api::rest::dto::{RecoveredPassword, ResetTarget, SendCodeRequest, VerifyCodeRequest};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::ApiJson;
use crate::domain::service::AppServices;

/// POST /api/auth/forgot-password/send
#[tracing::instrument(skip_all)]
pub async fn send_code(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<SendCodeRequest>,
) -> ApiResult<JsonEnvelope<()>> {
    let target = ResetTarget::try_from(body)?;
    svc.password_reset
        .send_code(&target.ancd, &target.uid, &target.email)
        .await?;
    Ok(envelope::done("인증 코드가 이메일로 발송되었습니다"))
}

/// POST /api/auth/forgot-password/verify - single use; answers with the
/// account's stored password.
#[tracing::instrument(skip_all)]
pub async fn verify_code(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<VerifyCodeRequest>,
) -> ApiResult<JsonEnvelope<RecoveredPassword>> {
    let (target, code) = body.into_parts()?;
    let password = svc
        .password_reset
        .verify(&target.ancd, &target.uid, &target.email, &code)
        .await?;
    Ok(envelope::ok_with_message(
        RecoveredPassword { password },
        "인증되었습니다",
    ))
}
