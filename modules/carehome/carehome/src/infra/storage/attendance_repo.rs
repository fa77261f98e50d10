use std::sync::Arc;

use async_trait::async_trait;
use carehome_sdk::{Attendance, AttendanceFilter};
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use super::db::DbAccessor;
use super::entity::{AttendanceEntity, attendance};
use super::mapper::attendance_to_active_model;
use crate::domain::error::DomainError;
use crate::domain::repos::AttendanceRepository;

pub struct SeaOrmAttendanceRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmAttendanceRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceRepository for SeaOrmAttendanceRepository {
    async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<Attendance>, DomainError> {
        let cond = Condition::all()
            .add(attendance::Column::Ancd.eq(filter.ancd.as_str()))
            .add_option(filter.empno.as_deref().map(|e| attendance::Column::Empno.eq(e)))
            .add_option(filter.from.map(|d| attendance::Column::Wdt.gte(d)))
            .add_option(filter.to.map(|d| attendance::Column::Wdt.lte(d)));

        let conn = self.db.conn().await?;
        let rows = AttendanceEntity::find()
            .filter(cond)
            .order_by_asc(attendance::Column::Wdt)
            .order_by_asc(attendance::Column::Empno)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert(&self, attendance: Attendance) -> Result<Attendance, DomainError> {
        let conn = self.db.conn().await?;
        AttendanceEntity::insert(attendance_to_active_model(attendance.clone()))
            .on_conflict(
                OnConflict::columns([
                    attendance::Column::Ancd,
                    attendance::Column::Empno,
                    attendance::Column::Wdt,
                ])
                .update_columns([
                    attendance::Column::Sttm,
                    attendance::Column::Edtm,
                    attendance::Column::Wktyp,
                    attendance::Column::Remark,
                ])
                .to_owned(),
            )
            .exec_without_returning(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(attendance)
    }

    async fn delete(
        &self,
        ancd: &str,
        empno: &str,
        work_date: NaiveDate,
    ) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let res = AttendanceEntity::delete_many()
            .filter(attendance::Column::Ancd.eq(ancd))
            .filter(attendance::Column::Empno.eq(empno))
            .filter(attendance::Column::Wdt.eq(work_date))
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }
}
