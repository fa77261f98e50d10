mod assessments_repo;
mod attendance_repo;
mod consultations_repo;
mod contracts_repo;
mod credentials_repo;
mod employees_repo;
mod residents_repo;

pub use assessments_repo::{AssessmentKey, AssessmentsRepository};
pub use attendance_repo::AttendanceRepository;
pub use consultations_repo::ConsultationsRepository;
pub use contracts_repo::ContractsRepository;
pub use credentials_repo::{CredentialsRepository, StoredCredential};
pub use employees_repo::EmployeesRepository;
pub use residents_repo::ResidentsRepository;
