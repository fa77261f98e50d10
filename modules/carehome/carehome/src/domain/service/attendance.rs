use std::sync::Arc;

use carehome_sdk::{Attendance, AttendanceFilter};
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::AttendanceRepository;
use crate::domain::validation::ensure_range;

pub struct AttendanceService {
    repo: Arc<dyn AttendanceRepository>,
}

impl AttendanceService {
    pub fn new(repo: Arc<dyn AttendanceRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, filter), fields(ancd = %filter.ancd))]
    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<Attendance>, DomainError> {
        ensure_range(filter.from, filter.to)?;
        let rows = self.repo.list(filter).await?;
        debug!(count = rows.len(), "Listed attendance");
        Ok(rows)
    }

    /// Insert-or-update; calling twice with one key leaves a single row.
    #[instrument(
        skip(self, attendance),
        fields(ancd = %attendance.ancd, empno = %attendance.empno, wdt = %attendance.work_date)
    )]
    pub async fn upsert(&self, attendance: Attendance) -> Result<Attendance, DomainError> {
        // EDTM may precede STTM: night shifts end the next day.
        Self::check_clock_time("STTM", attendance.start_time.as_deref())?;
        Self::check_clock_time("EDTM", attendance.end_time.as_deref())?;

        let saved = self.repo.upsert(attendance).await?;
        info!("Saved attendance");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        ancd: &str,
        empno: &str,
        work_date: NaiveDate,
    ) -> Result<(), DomainError> {
        if !self.repo.delete(ancd, empno, work_date).await? {
            return Err(DomainError::not_found(
                "attendance",
                format!("{ancd}/{empno}/{work_date}"),
            ));
        }
        info!("Deleted attendance");
        Ok(())
    }

    /// Accepts `HH:MM` and `HH:MM:SS`.
    fn check_clock_time(field: &'static str, value: Option<&str>) -> Result<(), DomainError> {
        let Some(raw) = value else {
            return Ok(());
        };
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map(|_| ())
            .map_err(|_| DomainError::validation(field, format!("'{raw}' is not a clock time")))
    }
}
