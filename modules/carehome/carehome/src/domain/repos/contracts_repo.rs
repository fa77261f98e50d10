use async_trait::async_trait;
use carehome_sdk::{Contract, ContractDraft, ContractKey};
use chrono::NaiveDateTime;

use crate::domain::error::DomainError;

/// Persistence for service agreements (`F10020`).
#[async_trait]
pub trait ContractsRepository: Send + Sync {
    async fn list(&self, ancd: &str, pnum: Option<i32>) -> Result<Vec<Contract>, DomainError>;

    /// Inserts the contract and copies its grade onto the resident in one
    /// transaction. Fails with `NotFound` when the resident does not exist.
    async fn create(
        &self,
        draft: ContractDraft,
        inserted_at: NaiveDateTime,
    ) -> Result<Contract, DomainError>;

    async fn update(&self, contract: Contract) -> Result<bool, DomainError>;

    async fn delete(&self, key: &ContractKey) -> Result<bool, DomainError>;
}
