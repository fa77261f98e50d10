use std::sync::Arc;

use carehome_sdk::{Assessment, AssessmentFilter};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::{AssessmentKey, AssessmentsRepository};

pub struct AssessmentsService {
    repo: Arc<dyn AssessmentsRepository>,
}

impl AssessmentsService {
    pub fn new(repo: Arc<dyn AssessmentsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, filter), fields(ancd = %filter.ancd))]
    pub async fn list(&self, filter: &AssessmentFilter) -> Result<Vec<Assessment>, DomainError> {
        let rows = self.repo.list(filter).await?;
        debug!(count = rows.len(), "Listed assessments");
        Ok(rows)
    }

    #[instrument(
        skip(self, assessment),
        fields(ancd = %assessment.ancd, pnum = assessment.pnum, astyp = %assessment.form_type)
    )]
    pub async fn upsert(&self, assessment: Assessment) -> Result<Assessment, DomainError> {
        if let Some(items) = assessment.items.as_deref() {
            serde_json::from_str::<serde_json::Value>(items)
                .map_err(|e| DomainError::validation("ITEMS", e.to_string()))?;
        }
        if assessment.score.is_some_and(|s| s < 0) {
            return Err(DomainError::validation("SCORE", "score must not be negative"));
        }

        let saved = self.repo.upsert(assessment).await?;
        info!("Saved assessment");
        Ok(saved)
    }

    #[instrument(skip(self, key), fields(ancd = %key.ancd, pnum = key.pnum))]
    pub async fn delete(&self, key: &AssessmentKey) -> Result<(), DomainError> {
        if !self.repo.delete(key).await? {
            return Err(DomainError::not_found(
                "assessment",
                format!("{}/{}/{}/{}", key.ancd, key.pnum, key.date, key.form_type),
            ));
        }
        info!("Deleted assessment");
        Ok(())
    }
}
