use std::sync::Arc;

use carehome_sdk::{Consultation, ConsultationDraft, ConsultationFilter};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::ConsultationsRepository;
use crate::domain::validation::ensure_range;

pub struct ConsultationsService {
    repo: Arc<dyn ConsultationsRepository>,
}

impl ConsultationsService {
    pub fn new(repo: Arc<dyn ConsultationsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, filter), fields(ancd = %filter.ancd))]
    pub async fn list(&self, filter: &ConsultationFilter) -> Result<Vec<Consultation>, DomainError> {
        ensure_range(filter.from, filter.to)?;
        let rows = self.repo.list(filter).await?;
        debug!(count = rows.len(), "Listed consultations");
        Ok(rows)
    }

    #[instrument(skip(self, draft), fields(ancd = %draft.ancd, pnum = draft.pnum))]
    pub async fn create(&self, draft: ConsultationDraft) -> Result<Consultation, DomainError> {
        let created = self.repo.create(draft).await?;
        info!(csnum = created.csnum, "Recorded consultation");
        Ok(created)
    }

    #[instrument(
        skip(self, consultation),
        fields(ancd = %consultation.ancd, pnum = consultation.pnum, csnum = consultation.csnum)
    )]
    pub async fn update(&self, consultation: Consultation) -> Result<Consultation, DomainError> {
        let key = format!(
            "{}/{}/{}",
            consultation.ancd, consultation.pnum, consultation.csnum
        );
        if !self.repo.update(consultation.clone()).await? {
            return Err(DomainError::not_found("consultation", key));
        }
        info!("Updated consultation");
        Ok(consultation)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, ancd: &str, pnum: i32, csnum: i32) -> Result<(), DomainError> {
        if !self.repo.delete(ancd, pnum, csnum).await? {
            return Err(DomainError::not_found(
                "consultation",
                format!("{ancd}/{pnum}/{csnum}"),
            ));
        }
        info!("Deleted consultation");
        Ok(())
    }
}
