use std::sync::Arc;

use async_trait::async_trait;
use carehome_sdk::{Resident, ResidentDraft, ResidentFilter};
use sea_orm::{
    ColumnTrait, Condition, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use tracing::debug;

use super::db::DbAccessor;
use super::entity::{ResidentEntity, resident};
use super::mapper::resident_to_active_model;
use super::{MAX_SEQUENCE_ATTEMPTS, contains, is_unique_violation};
use crate::domain::error::DomainError;
use crate::domain::repos::ResidentsRepository;

pub struct SeaOrmResidentsRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmResidentsRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }

    fn key(ancd: &str, pnum: i32) -> Condition {
        Condition::all()
            .add(resident::Column::Ancd.eq(ancd))
            .add(resident::Column::Pnum.eq(pnum))
    }

    async fn next_pnum(&self, txn: &DatabaseTransaction, ancd: &str) -> Result<i32, DomainError> {
        let max = ResidentEntity::find()
            .select_only()
            .column_as(resident::Column::Pnum.max(), "max_pnum")
            .filter(resident::Column::Ancd.eq(ancd))
            .into_tuple::<Option<i32>>()
            .one(txn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(max.flatten().unwrap_or(0) + 1)
    }
}

#[async_trait]
impl ResidentsRepository for SeaOrmResidentsRepository {
    async fn list(&self, filter: &ResidentFilter) -> Result<Vec<Resident>, DomainError> {
        let cond = Condition::all()
            .add(resident::Column::Ancd.eq(filter.ancd.as_str()))
            .add_option(filter.name.as_deref().map(|n| resident::Column::PNm.like(contains(n))))
            .add_option(filter.status.map(|s| resident::Column::PSt.eq(s.code())))
            .add_option(filter.grade.as_deref().map(|g| resident::Column::PGrd.eq(g)));

        let conn = self.db.conn().await?;
        let rows = ResidentEntity::find()
            .filter(cond)
            .order_by_asc(resident::Column::Pnum)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, ancd: &str, term: &str) -> Result<Vec<Resident>, DomainError> {
        let matches = Condition::any()
            .add(resident::Column::PNm.like(contains(term)))
            .add_option(term.parse::<i32>().ok().map(|n| resident::Column::Pnum.eq(n)));
        let cond = Condition::all()
            .add(resident::Column::Ancd.eq(ancd))
            .add(matches);

        let conn = self.db.conn().await?;
        let rows = ResidentEntity::find()
            .filter(cond)
            .order_by_asc(resident::Column::PNm)
            .order_by_asc(resident::Column::Pnum)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, ancd: &str, pnum: i32) -> Result<Option<Resident>, DomainError> {
        let conn = self.db.conn().await?;
        let row = ResidentEntity::find_by_id((ancd.to_owned(), pnum))
            .one(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: ResidentDraft) -> Result<Resident, DomainError> {
        let conn = self.db.conn().await?;

        for attempt in 1..=MAX_SEQUENCE_ATTEMPTS {
            let txn = conn.begin().await.map_err(|e| self.db.fail(e))?;
            let pnum = self.next_pnum(&txn, &draft.ancd).await?;
            let resident = draft.clone().into_resident(pnum);

            match ResidentEntity::insert(resident_to_active_model(resident.clone()))
                .exec_without_returning(&txn)
                .await
            {
                Ok(_) => {
                    txn.commit().await.map_err(|e| self.db.fail(e))?;
                    return Ok(resident);
                }
                Err(e) if is_unique_violation(&e) => {
                    debug!(attempt, pnum, "PNUM taken by a concurrent insert, retrying");
                    txn.rollback().await.map_err(|e| self.db.fail(e))?;
                }
                Err(e) => return Err(self.db.fail(e)),
            }
        }

        Err(DomainError::conflict("resident", format!("{}/PNUM", draft.ancd)))
    }

    async fn update(&self, resident: Resident) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let cond = Self::key(&resident.ancd, resident.pnum);
        let res = ResidentEntity::update_many()
            .set(resident_to_active_model(resident))
            .filter(cond)
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, ancd: &str, pnum: i32) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let res = ResidentEntity::delete_many()
            .filter(Self::key(ancd, pnum))
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }
}
