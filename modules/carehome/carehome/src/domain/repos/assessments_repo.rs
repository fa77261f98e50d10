use async_trait::async_trait;
use carehome_sdk::{Assessment, AssessmentFilter};
use chrono::NaiveDate;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentKey {
    pub ancd: String,
    pub pnum: i32,
    pub date: NaiveDate,
    pub form_type: String,
}

/// Persistence for care-assessment forms (`F10040`).
#[async_trait]
pub trait AssessmentsRepository: Send + Sync {
    async fn list(&self, filter: &AssessmentFilter) -> Result<Vec<Assessment>, DomainError>;

    async fn upsert(&self, assessment: Assessment) -> Result<Assessment, DomainError>;

    async fn delete(&self, key: &AssessmentKey) -> Result<bool, DomainError>;
}
