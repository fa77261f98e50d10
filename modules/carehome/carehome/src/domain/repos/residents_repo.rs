use async_trait::async_trait;
use carehome_sdk::{Resident, ResidentDraft, ResidentFilter};

use crate::domain::error::DomainError;

/// Persistence for care recipients (`F10010`).
#[async_trait]
pub trait ResidentsRepository: Send + Sync {
    async fn list(&self, filter: &ResidentFilter) -> Result<Vec<Resident>, DomainError>;

    /// Name (contains) or exact resident number match within one facility.
    async fn search(&self, ancd: &str, term: &str) -> Result<Vec<Resident>, DomainError>;

    async fn get(&self, ancd: &str, pnum: i32) -> Result<Option<Resident>, DomainError>;

    /// Inserts with the next free `PNUM` of the facility.
    async fn create(&self, draft: ResidentDraft) -> Result<Resident, DomainError>;

    async fn update(&self, resident: Resident) -> Result<bool, DomainError>;

    async fn delete(&self, ancd: &str, pnum: i32) -> Result<bool, DomainError>;
}
