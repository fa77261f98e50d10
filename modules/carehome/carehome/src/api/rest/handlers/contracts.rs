use axum::Extension;
use carehome_sdk::ContractKey;

use super::{CREATED, DELETED, UPDATED};
use crate::api::rest::dto::{ContractBody, ContractKeyQuery, ContractQuery, ContractRow};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::{ApiJson, ApiQuery};
use crate::domain::service::AppServices;

/// GET /api/contracts
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ContractQuery>,
) -> ApiResult<JsonEnvelope<Vec<ContractRow>>> {
    let (ancd, pnum) = query.into_filter()?;
    let rows = svc.contracts.list(&ancd, pnum).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/contracts - also records the contract grade on the resident.
#[tracing::instrument(skip_all)]
pub async fn create(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<ContractBody>,
) -> ApiResult<JsonEnvelope<ContractRow>> {
    let contract = svc.contracts.create(body.into_draft()?).await?;
    Ok(envelope::ok_with_message(contract.into(), CREATED))
}

/// PUT /api/contracts
#[tracing::instrument(skip_all)]
pub async fn update(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<ContractBody>,
) -> ApiResult<JsonEnvelope<ContractRow>> {
    let contract = svc.contracts.update(body.into_contract()?).await?;
    Ok(envelope::ok_with_message(contract.into(), UPDATED))
}

/// DELETE /api/contracts
#[tracing::instrument(skip_all)]
pub async fn delete(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<ContractKeyQuery>,
) -> ApiResult<JsonEnvelope<()>> {
    let key = ContractKey::try_from(query)?;
    svc.contracts.delete(&key).await?;
    Ok(envelope::done(DELETED))
}
