use axum::Extension;
use carehome_sdk::ConsultationFilter;

use super::{CREATED, DELETED, UPDATED};
use crate::api::rest::dto::{
    ConsultationBody, ConsultationKeyQuery, ConsultationQuery, ConsultationRow,
};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::{ApiJson, ApiQuery};
use crate::domain::service::AppServices;

/// GET /api/consultations
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ConsultationQuery>,
) -> ApiResult<JsonEnvelope<Vec<ConsultationRow>>> {
    let filter = ConsultationFilter::try_from(query)?;
    let rows = svc.consultations.list(&filter).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/consultations - `CSNUM` is assigned by the server.
#[tracing::instrument(skip_all)]
pub async fn create(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<ConsultationBody>,
) -> ApiResult<JsonEnvelope<ConsultationRow>> {
    let created = svc.consultations.create(body.into_draft()?).await?;
    Ok(envelope::ok_with_message(created.into(), CREATED))
}

/// PUT /api/consultations
#[tracing::instrument(skip_all)]
pub async fn update(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<ConsultationBody>,
) -> ApiResult<JsonEnvelope<ConsultationRow>> {
    let updated = svc.consultations.update(body.into_consultation()?).await?;
    Ok(envelope::ok_with_message(updated.into(), UPDATED))
}

/// DELETE /api/consultations
#[tracing::instrument(skip_all)]
pub async fn delete(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ConsultationKeyQuery>,
) -> ApiResult<JsonEnvelope<()>> {
    let (ancd, pnum, csnum) = query.into_key()?;
    svc.consultations.delete(&ancd, pnum, csnum).await?;
    Ok(envelope::done(DELETED))
}
