use async_trait::async_trait;
use carehome_sdk::{Consultation, ConsultationDraft, ConsultationFilter};

use crate::domain::error::DomainError;

/// Persistence for counseling logs (`F10030`).
#[async_trait]
pub trait ConsultationsRepository: Send + Sync {
    async fn list(&self, filter: &ConsultationFilter) -> Result<Vec<Consultation>, DomainError>;

    /// Inserts with the next free `CSNUM` of the resident.
    async fn create(&self, draft: ConsultationDraft) -> Result<Consultation, DomainError>;

    async fn update(&self, consultation: Consultation) -> Result<bool, DomainError>;

    async fn delete(&self, ancd: &str, pnum: i32, csnum: i32) -> Result<bool, DomainError>;
}
