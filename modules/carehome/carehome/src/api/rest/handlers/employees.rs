use axum::Extension;
use carehome_sdk::{Employee, EmployeeFilter};

use super::{CREATED, DELETED, UPDATED};
use crate::api::rest::dto::{EmployeeBody, EmployeeKeyQuery, EmployeeQuery, EmployeeRow};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::{ApiJson, ApiQuery};
use crate::domain::service::AppServices;

/// GET /api/employees
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<EmployeeQuery>,
) -> ApiResult<JsonEnvelope<Vec<EmployeeRow>>> {
    let filter = EmployeeFilter::try_from(query)?;
    let rows = svc.employees.list(&filter).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/employees/detail
#[tracing::instrument(skip_all)]
pub async fn detail(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<EmployeeKeyQuery>,
) -> ApiResult<JsonEnvelope<EmployeeRow>> {
    let (ancd, empno) = query.into_key()?;
    let employee = svc.employees.get(&ancd, &empno).await?;
    Ok(envelope::ok(employee.into()))
}

/// POST /api/employees
#[tracing::instrument(skip_all)]
pub async fn create(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<EmployeeBody>,
) -> ApiResult<JsonEnvelope<EmployeeRow>> {
    let employee = svc.employees.create(Employee::try_from(body)?).await?;
    Ok(envelope::ok_with_message(employee.into(), CREATED))
}

/// PUT /api/employees
#[tracing::instrument(skip_all)]
pub async fn update(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<EmployeeBody>,
) -> ApiResult<JsonEnvelope<EmployeeRow>> {
    let employee = svc.employees.update(Employee::try_from(body)?).await?;
    Ok(envelope::ok_with_message(employee.into(), UPDATED))
}

/// DELETE /api/employees
#[tracing::instrument(skip_all)]
pub async fn delete(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<EmployeeKeyQuery>,
) -> ApiResult<JsonEnvelope<()>> {
    let (ancd, empno) = query.into_key()?;
    svc.employees.delete(&ancd, &empno).await?;
    Ok(envelope::done(DELETED))
}
