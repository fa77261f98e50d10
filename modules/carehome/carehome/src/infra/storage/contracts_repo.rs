use std::sync::Arc;

use async_trait::async_trait;
use carehome_sdk::{Contract, ContractDraft, ContractKey};
use chrono::NaiveDateTime;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

use super::db::DbAccessor;
use super::entity::{ContractEntity, ResidentEntity, contract, resident};
use super::is_unique_violation;
use super::mapper::contract_to_active_model;
use crate::domain::error::DomainError;
use crate::domain::repos::ContractsRepository;

pub struct SeaOrmContractsRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmContractsRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }

    fn key(ancd: &str, pnum: i32, inserted_at: NaiveDateTime) -> Condition {
        Condition::all()
            .add(contract::Column::Ancd.eq(ancd))
            .add(contract::Column::Pnum.eq(pnum))
            .add(contract::Column::Indt.eq(inserted_at))
    }
}

#[async_trait]
impl ContractsRepository for SeaOrmContractsRepository {
    async fn list(&self, ancd: &str, pnum: Option<i32>) -> Result<Vec<Contract>, DomainError> {
        let cond = Condition::all()
            .add(contract::Column::Ancd.eq(ancd))
            .add_option(pnum.map(|p| contract::Column::Pnum.eq(p)));

        let conn = self.db.conn().await?;
        let rows = ContractEntity::find()
            .filter(cond)
            .order_by_asc(contract::Column::Pnum)
            .order_by_desc(contract::Column::Indt)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(
        &self,
        draft: ContractDraft,
        inserted_at: NaiveDateTime,
    ) -> Result<Contract, DomainError> {
        let conn = self.db.conn().await?;
        let txn = conn.begin().await.map_err(|e| self.db.fail(e))?;

        let exists = ResidentEntity::find_by_id((draft.ancd.clone(), draft.pnum))
            .one(&txn)
            .await
            .map_err(|e| self.db.fail(e))?
            .is_some();
        if !exists {
            return Err(DomainError::not_found(
                "resident",
                format!("{}/{}", draft.ancd, draft.pnum),
            ));
        }

        let contract = draft.into_contract(inserted_at);
        let key = format!("{}/{}/{}", contract.ancd, contract.pnum, inserted_at);
        match ContractEntity::insert(contract_to_active_model(contract.clone()))
            .exec_without_returning(&txn)
            .await
        {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(DomainError::conflict("contract", key));
            }
            Err(e) => return Err(self.db.fail(e)),
        }

        if let Some(grade) = contract.grade.clone() {
            ResidentEntity::update_many()
                .col_expr(resident::Column::PGrd, Expr::value(grade))
                .filter(resident::Column::Ancd.eq(contract.ancd.as_str()))
                .filter(resident::Column::Pnum.eq(contract.pnum))
                .exec(&txn)
                .await
                .map_err(|e| self.db.fail(e))?;
        }

        txn.commit().await.map_err(|e| self.db.fail(e))?;
        Ok(contract)
    }

    async fn update(&self, contract: Contract) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let cond = Self::key(&contract.ancd, contract.pnum, contract.inserted_at);
        let res = ContractEntity::update_many()
            .set(contract_to_active_model(contract))
            .filter(cond)
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, key: &ContractKey) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let res = ContractEntity::delete_many()
            .filter(Self::key(&key.ancd, key.pnum, key.inserted_at))
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }
}
