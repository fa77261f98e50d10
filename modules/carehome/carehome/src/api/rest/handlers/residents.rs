use axum::Extension;
use carehome_sdk::ResidentFilter;

use super::{CREATED, DELETED, UPDATED};
use crate::api::rest::dto::{ResidentBody, ResidentKeyQuery, ResidentQuery, ResidentRow, SearchQuery};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::{ApiJson, ApiQuery};
use crate::domain::service::AppServices;
use crate::domain::validation::required;

/// GET /api/residents
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ResidentQuery>,
) -> ApiResult<JsonEnvelope<Vec<ResidentRow>>> {
    let filter = ResidentFilter::try_from(query)?;
    let rows = svc.residents.list(&filter).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/f10010/search - name or resident number lookup.
#[tracing::instrument(skip_all)]
pub async fn search(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<JsonEnvelope<Vec<ResidentRow>>> {
    let ancd = required("ancd", query.ancd)?;
    let term = required("q", query.q)?;
    let rows = svc.residents.search(&ancd, &term).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/residents/detail
#[tracing::instrument(skip_all)]
pub async fn detail(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ResidentKeyQuery>,
) -> ApiResult<JsonEnvelope<ResidentRow>> {
    let (ancd, pnum) = query.into_key()?;
    let resident = svc.residents.get(&ancd, pnum).await?;
    Ok(envelope::ok(resident.into()))
}

/// POST /api/residents - `PNUM` is assigned by the server.
#[tracing::instrument(skip_all)]
pub async fn create(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<ResidentBody>,
) -> ApiResult<JsonEnvelope<ResidentRow>> {
    let resident = svc.residents.create(body.into_draft()?).await?;
    Ok(envelope::ok_with_message(resident.into(), CREATED))
}

/// PUT /api/residents
#[tracing::instrument(skip_all)]
pub async fn update(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<ResidentBody>,
) -> ApiResult<JsonEnvelope<ResidentRow>> {
    let resident = svc.residents.update(body.into_resident()?).await?;
    Ok(envelope::ok_with_message(resident.into(), UPDATED))
}

/// DELETE /api/residents
#[tracing::instrument(skip_all)]
pub async fn delete(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ResidentKeyQuery>,
) -> ApiResult<JsonEnvelope<()>> {
    let (ancd, pnum) = query.into_key()?;
    svc.residents.delete(&ancd, pnum).await?;
    Ok(envelope::done(DELETED))
}
