use std::sync::Arc;

use carehome_sdk::{Resident, ResidentDraft, ResidentFilter, ResidentStatus};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::ResidentsRepository;

pub struct ResidentsService {
    repo: Arc<dyn ResidentsRepository>,
}

impl ResidentsService {
    pub fn new(repo: Arc<dyn ResidentsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, filter), fields(ancd = %filter.ancd))]
    pub async fn list(&self, filter: &ResidentFilter) -> Result<Vec<Resident>, DomainError> {
        let rows = self.repo.list(filter).await?;
        debug!(count = rows.len(), "Listed residents");
        Ok(rows)
    }

    #[instrument(skip(self, term))]
    pub async fn search(&self, ancd: &str, term: &str) -> Result<Vec<Resident>, DomainError> {
        let rows = self.repo.search(ancd, term.trim()).await?;
        debug!(count = rows.len(), "Searched residents");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, ancd: &str, pnum: i32) -> Result<Resident, DomainError> {
        self.repo
            .get(ancd, pnum)
            .await?
            .ok_or_else(|| DomainError::not_found("resident", format!("{ancd}/{pnum}")))
    }

    #[instrument(skip(self, draft), fields(ancd = %draft.ancd))]
    pub async fn create(&self, mut draft: ResidentDraft) -> Result<Resident, DomainError> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::missing("P_NM"));
        }
        Self::check_status(draft.status.as_deref())?;
        if draft.status.is_none() {
            draft.status = Some(ResidentStatus::InCare.code().to_owned());
        }

        let resident = self.repo.create(draft).await?;
        info!(pnum = resident.pnum, "Registered resident");
        Ok(resident)
    }

    #[instrument(skip(self, resident), fields(ancd = %resident.ancd, pnum = resident.pnum))]
    pub async fn update(&self, resident: Resident) -> Result<Resident, DomainError> {
        if resident.name.trim().is_empty() {
            return Err(DomainError::missing("P_NM"));
        }
        Self::check_status(resident.status.as_deref())?;

        let key = format!("{}/{}", resident.ancd, resident.pnum);
        if !self.repo.update(resident.clone()).await? {
            return Err(DomainError::not_found("resident", key));
        }
        info!("Updated resident");
        Ok(resident)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, ancd: &str, pnum: i32) -> Result<(), DomainError> {
        if !self.repo.delete(ancd, pnum).await? {
            return Err(DomainError::not_found("resident", format!("{ancd}/{pnum}")));
        }
        info!("Deleted resident");
        Ok(())
    }

    fn check_status(status: Option<&str>) -> Result<(), DomainError> {
        match status {
            Some(code) if ResidentStatus::from_code(code).is_none() => Err(
                DomainError::validation("P_ST", format!("unknown status code '{code}'")),
            ),
            _ => Ok(()),
        }
    }
}
