use std::sync::Arc;

use carehome_sdk::{Employee, EmployeeFilter};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::EmployeesRepository;

pub struct EmployeesService {
    repo: Arc<dyn EmployeesRepository>,
}

impl EmployeesService {
    pub fn new(repo: Arc<dyn EmployeesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, filter), fields(ancd = %filter.ancd))]
    pub async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let rows = self.repo.list(filter).await?;
        debug!(count = rows.len(), "Listed employees");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, ancd: &str, empno: &str) -> Result<Employee, DomainError> {
        self.repo
            .get(ancd, empno)
            .await?
            .ok_or_else(|| DomainError::not_found("employee", format!("{ancd}/{empno}")))
    }

    #[instrument(skip(self, employee), fields(ancd = %employee.ancd, empno = %employee.empno))]
    pub async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        Self::validate(&employee)?;
        let created = self.repo.create(employee).await?;
        info!("Created employee");
        Ok(created)
    }

    #[instrument(skip(self, employee), fields(ancd = %employee.ancd, empno = %employee.empno))]
    pub async fn update(&self, employee: Employee) -> Result<Employee, DomainError> {
        Self::validate(&employee)?;
        let key = format!("{}/{}", employee.ancd, employee.empno);
        if !self.repo.update(employee.clone()).await? {
            return Err(DomainError::not_found("employee", key));
        }
        info!("Updated employee");
        Ok(employee)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, ancd: &str, empno: &str) -> Result<(), DomainError> {
        if !self.repo.delete(ancd, empno).await? {
            return Err(DomainError::not_found("employee", format!("{ancd}/{empno}")));
        }
        info!("Deleted employee");
        Ok(())
    }

    fn validate(employee: &Employee) -> Result<(), DomainError> {
        if employee.name.trim().is_empty() {
            return Err(DomainError::missing("EMPNM"));
        }
        if let (Some(hired), Some(retired)) = (employee.hired_on, employee.retired_on) {
            if retired < hired {
                return Err(DomainError::validation(
                    "OUTDT",
                    format!("retirement {retired} precedes hiring {hired}"),
                ));
            }
        }
        Ok(())
    }
}
