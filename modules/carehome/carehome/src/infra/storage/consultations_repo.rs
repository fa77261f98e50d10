use std::sync::Arc;

use async_trait::async_trait;
use carehome_sdk::{Consultation, ConsultationDraft, ConsultationFilter};
use sea_orm::{
    ColumnTrait, Condition, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use tracing::debug;

use super::db::DbAccessor;
use super::entity::{ConsultationEntity, consultation};
use super::mapper::consultation_to_active_model;
use super::{MAX_SEQUENCE_ATTEMPTS, is_unique_violation};
use crate::domain::error::DomainError;
use crate::domain::repos::ConsultationsRepository;

pub struct SeaOrmConsultationsRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmConsultationsRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }

    fn key(ancd: &str, pnum: i32, csnum: i32) -> Condition {
        Condition::all()
            .add(consultation::Column::Ancd.eq(ancd))
            .add(consultation::Column::Pnum.eq(pnum))
            .add(consultation::Column::Csnum.eq(csnum))
    }

    async fn next_csnum(
        &self,
        txn: &DatabaseTransaction,
        ancd: &str,
        pnum: i32,
    ) -> Result<i32, DomainError> {
        let max = ConsultationEntity::find()
            .select_only()
            .column_as(consultation::Column::Csnum.max(), "max_csnum")
            .filter(consultation::Column::Ancd.eq(ancd))
            .filter(consultation::Column::Pnum.eq(pnum))
            .into_tuple::<Option<i32>>()
            .one(txn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(max.flatten().unwrap_or(0) + 1)
    }
}

#[async_trait]
impl ConsultationsRepository for SeaOrmConsultationsRepository {
    async fn list(&self, filter: &ConsultationFilter) -> Result<Vec<Consultation>, DomainError> {
        let cond = Condition::all()
            .add(consultation::Column::Ancd.eq(filter.ancd.as_str()))
            .add_option(filter.pnum.map(|p| consultation::Column::Pnum.eq(p)))
            .add_option(filter.from.map(|d| consultation::Column::Csdt.gte(d)))
            .add_option(filter.to.map(|d| consultation::Column::Csdt.lte(d)));

        let conn = self.db.conn().await?;
        let rows = ConsultationEntity::find()
            .filter(cond)
            .order_by_desc(consultation::Column::Csdt)
            .order_by_desc(consultation::Column::Csnum)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: ConsultationDraft) -> Result<Consultation, DomainError> {
        let conn = self.db.conn().await?;

        for attempt in 1..=MAX_SEQUENCE_ATTEMPTS {
            let txn = conn.begin().await.map_err(|e| self.db.fail(e))?;
            let csnum = self.next_csnum(&txn, &draft.ancd, draft.pnum).await?;
            let consultation = draft.clone().into_consultation(csnum);

            match ConsultationEntity::insert(consultation_to_active_model(consultation.clone()))
                .exec_without_returning(&txn)
                .await
            {
                Ok(_) => {
                    txn.commit().await.map_err(|e| self.db.fail(e))?;
                    return Ok(consultation);
                }
                Err(e) if is_unique_violation(&e) => {
                    debug!(attempt, csnum, "CSNUM taken by a concurrent insert, retrying");
                    txn.rollback().await.map_err(|e| self.db.fail(e))?;
                }
                Err(e) => return Err(self.db.fail(e)),
            }
        }

        Err(DomainError::conflict(
            "consultation",
            format!("{}/{}/CSNUM", draft.ancd, draft.pnum),
        ))
    }

    async fn update(&self, consultation: Consultation) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let cond = Self::key(&consultation.ancd, consultation.pnum, consultation.csnum);
        let res = ConsultationEntity::update_many()
            .set(consultation_to_active_model(consultation))
            .filter(cond)
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, ancd: &str, pnum: i32, csnum: i32) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let res = ConsultationEntity::delete_many()
            .filter(Self::key(ancd, pnum, csnum))
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }
}
