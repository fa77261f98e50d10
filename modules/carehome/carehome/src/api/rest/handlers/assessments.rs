use axum::Extension;
use carehome_sdk::{Assessment, AssessmentFilter};

use super::{DELETED, SAVED};
use crate::api::rest::dto::{AssessmentBody, AssessmentKeyQuery, AssessmentQuery, AssessmentRow};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::{ApiJson, ApiQuery};
use crate::domain::repos::AssessmentKey;
use crate::domain::service::AppServices;

/// GET /api/assessments
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<AssessmentQuery>,
) -> ApiResult<JsonEnvelope<Vec<AssessmentRow>>> {
    let filter = AssessmentFilter::try_from(query)?;
    let rows = svc.assessments.list(&filter).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/assessments - insert or replace the form.
#[tracing::instrument(skip_all)]
pub async fn upsert(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<AssessmentBody>,
) -> ApiResult<JsonEnvelope<AssessmentRow>> {
    let saved = svc.assessments.upsert(Assessment::try_from(body)?).await?;
    Ok(envelope::ok_with_message(saved.into(), SAVED))
}

/// DELETE /api/assessments
#[tracing::instrument(skip_all)]
pub async fn delete(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<AssessmentKeyQuery>,
) -> ApiResult<JsonEnvelope<()>> {
    let key = AssessmentKey::try_from(query)?;
    svc.assessments.delete(&key).await?;
    Ok(envelope::done(DELETED))
}
