use std::sync::Arc;

use carehome_sdk::{Contract, ContractDraft, ContractKey};
use chrono::{NaiveDate, SubsecRound};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::ports::Clock;
use crate::domain::repos::ContractsRepository;

pub struct ContractsService {
    repo: Arc<dyn ContractsRepository>,
    clock: Arc<dyn Clock>,
}

impl ContractsService {
    pub fn new(repo: Arc<dyn ContractsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, ancd: &str, pnum: Option<i32>) -> Result<Vec<Contract>, DomainError> {
        let rows = self.repo.list(ancd, pnum).await?;
        debug!(count = rows.len(), "Listed contracts");
        Ok(rows)
    }

    /// Stamps `INDT` with the current time (millisecond precision) and
    /// stores the contract together with the resident's new grade.
    #[instrument(skip(self, draft), fields(ancd = %draft.ancd, pnum = draft.pnum))]
    pub async fn create(&self, draft: ContractDraft) -> Result<Contract, DomainError> {
        Self::validate(draft.start_date, draft.end_date, draft.monthly_amount)?;

        let inserted_at = self.clock.now().naive_utc().trunc_subsecs(3);
        let contract = self.repo.create(draft, inserted_at).await?;
        info!(indt = %contract.inserted_at, "Created contract");
        Ok(contract)
    }

    #[instrument(skip(self, contract), fields(ancd = %contract.ancd, pnum = contract.pnum))]
    pub async fn update(&self, contract: Contract) -> Result<Contract, DomainError> {
        Self::validate(contract.start_date, contract.end_date, contract.monthly_amount)?;

        let key = format!("{}/{}/{}", contract.ancd, contract.pnum, contract.inserted_at);
        if !self.repo.update(contract.clone()).await? {
            return Err(DomainError::not_found("contract", key));
        }
        info!("Updated contract");
        Ok(contract)
    }

    #[instrument(skip(self, key), fields(ancd = %key.ancd, pnum = key.pnum))]
    pub async fn delete(&self, key: &ContractKey) -> Result<(), DomainError> {
        if !self.repo.delete(key).await? {
            return Err(DomainError::not_found(
                "contract",
                format!("{}/{}/{}", key.ancd, key.pnum, key.inserted_at),
            ));
        }
        info!("Deleted contract");
        Ok(())
    }

    fn validate(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        amount: Option<i64>,
    ) -> Result<(), DomainError> {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(DomainError::validation(
                    "CTEDT",
                    format!("contract ends {end} before it starts {start}"),
                ));
            }
        }
        if amount.is_some_and(|a| a < 0) {
            return Err(DomainError::validation("MAMT", "amount must not be negative"));
        }
        Ok(())
    }
}
