use axum::Extension;
use carehome_sdk::{Attendance, AttendanceFilter};

use super::{DELETED, SAVED};
use crate::api::rest::dto::{AttendanceBody, AttendanceKeyQuery, AttendanceQuery, AttendanceRow};
use crate::api::rest::envelope::{self, JsonEnvelope};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::{ApiJson, ApiQuery};
use crate::domain::service::AppServices;

/// GET /api/attendance
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<AttendanceQuery>,
) -> ApiResult<JsonEnvelope<Vec<AttendanceRow>>> {
    let filter = AttendanceFilter::try_from(query)?;
    let rows = svc.attendance.list(&filter).await?;
    Ok(envelope::list(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/attendance - insert or update the day's row.
#[tracing::instrument(skip_all)]
pub async fn upsert(
    Extension(svc): Extension<AppServices>,
    ApiJson(body): ApiJson<AttendanceBody>,
) -> ApiResult<JsonEnvelope<AttendanceRow>> {
    let saved = svc.attendance.upsert(Attendance::try_from(body)?).await?;
    Ok(envelope::ok_with_message(saved.into(), SAVED))
}

/// DELETE /api/attendance
#[tracing::instrument(skip_all)]
pub async fn delete(
    Extension(svc): Extension<AppServices>,
    ApiQuery(query): ApiQuery<AttendanceKeyQuery>,
) -> ApiResult<JsonEnvelope<()>> {
    let (ancd, empno, wdt) = query.into_key()?;
    svc.attendance.delete(&ancd, &empno, wdt).await?;
    Ok(envelope::done(DELETED))
}
