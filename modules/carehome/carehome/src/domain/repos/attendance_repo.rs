use async_trait::async_trait;
use carehome_sdk::{Attendance, AttendanceFilter};
use chrono::NaiveDate;

use crate::domain::error::DomainError;

/// Persistence for daily attendance (`F01030`).
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<Attendance>, DomainError>;

    /// Insert-or-update on (`ANCD`, `EMPNO`, `WDT`).
    async fn upsert(&self, attendance: Attendance) -> Result<Attendance, DomainError>;

    async fn delete(&self, ancd: &str, empno: &str, work_date: NaiveDate)
    -> Result<bool, DomainError>;
}
