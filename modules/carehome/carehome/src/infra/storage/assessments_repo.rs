use std::sync::Arc;

use async_trait::async_trait;
use carehome_sdk::{Assessment, AssessmentFilter};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use super::db::DbAccessor;
use super::entity::{AssessmentEntity, assessment};
use super::mapper::assessment_to_active_model;
use crate::domain::error::DomainError;
use crate::domain::repos::{AssessmentKey, AssessmentsRepository};

pub struct SeaOrmAssessmentsRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmAssessmentsRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssessmentsRepository for SeaOrmAssessmentsRepository {
    async fn list(&self, filter: &AssessmentFilter) -> Result<Vec<Assessment>, DomainError> {
        let cond = Condition::all()
            .add(assessment::Column::Ancd.eq(filter.ancd.as_str()))
            .add_option(filter.pnum.map(|p| assessment::Column::Pnum.eq(p)))
            .add_option(
                filter
                    .form_type
                    .as_deref()
                    .map(|t| assessment::Column::Astyp.eq(t)),
            );

        let conn = self.db.conn().await?;
        let rows = AssessmentEntity::find()
            .filter(cond)
            .order_by_desc(assessment::Column::Asdt)
            .order_by_asc(assessment::Column::Astyp)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert(&self, assessment: Assessment) -> Result<Assessment, DomainError> {
        let conn = self.db.conn().await?;
        AssessmentEntity::insert(assessment_to_active_model(assessment.clone()))
            .on_conflict(
                OnConflict::columns([
                    assessment::Column::Ancd,
                    assessment::Column::Pnum,
                    assessment::Column::Asdt,
                    assessment::Column::Astyp,
                ])
                .update_columns([
                    assessment::Column::Empno,
                    assessment::Column::Score,
                    assessment::Column::Items,
                    assessment::Column::Remark,
                ])
                .to_owned(),
            )
            .exec_without_returning(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(assessment)
    }

    async fn delete(&self, key: &AssessmentKey) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let res = AssessmentEntity::delete_many()
            .filter(assessment::Column::Ancd.eq(key.ancd.as_str()))
            .filter(assessment::Column::Pnum.eq(key.pnum))
            .filter(assessment::Column::Asdt.eq(key.date))
            .filter(assessment::Column::Astyp.eq(key.form_type.as_str()))
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }
}
