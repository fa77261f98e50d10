use async_trait::async_trait;
use carehome_sdk::{Employee, EmployeeFilter};

use crate::domain::error::DomainError;

/// Persistence for staff records (`F01010`).
#[async_trait]
pub trait EmployeesRepository: Send + Sync {
    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError>;

    async fn get(&self, ancd: &str, empno: &str) -> Result<Option<Employee>, DomainError>;

    /// Fails with `Conflict` when the key is taken.
    async fn create(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Returns `false` when no row has the key.
    async fn update(&self, employee: Employee) -> Result<bool, DomainError>;

    async fn delete(&self, ancd: &str, empno: &str) -> Result<bool, DomainError>;
}
