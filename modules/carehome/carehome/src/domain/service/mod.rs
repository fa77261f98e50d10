//! Domain service layer - business rules per record type.
//!
//! The domain layer:
//! - **MAY** import: `carehome_sdk` (record models), `domain::ports`, `domain::repos`
//! - **MUST NOT** import: `api::*` or `infra::*`
//!
//! Services receive already-present identifiers from the REST layer and
//! enforce the remaining rules (ranges, formats, existence).

use std::sync::Arc;

use chrono::Duration;

use crate::domain::ports::{Clock, CodeMailer, SessionStore, VerificationCodeStore};
use crate::domain::repos::{
    AssessmentsRepository, AttendanceRepository, ConsultationsRepository, ContractsRepository,
    CredentialsRepository, EmployeesRepository, ResidentsRepository,
};

mod assessments;
mod attendance;
mod auth;
mod consultations;
mod contracts;
mod employees;
mod password_reset;
mod residents;

pub use assessments::AssessmentsService;
pub use attendance::AttendanceService;
pub use auth::{AuthService, LoginOutcome};
pub use consultations::ConsultationsService;
pub use contracts::ContractsService;
pub use employees::EmployeesService;
pub use password_reset::PasswordResetService;
pub use residents::ResidentsService;

/// Configuration for the domain services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub session_ttl: Duration,
    pub code_ttl: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::hours(24),
            code_ttl: Duration::minutes(10),
        }
    }
}

/// Repositories backing the services.
pub struct Repositories {
    pub employees: Arc<dyn EmployeesRepository>,
    pub residents: Arc<dyn ResidentsRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub contracts: Arc<dyn ContractsRepository>,
    pub consultations: Arc<dyn ConsultationsRepository>,
    pub assessments: Arc<dyn AssessmentsRepository>,
    pub credentials: Arc<dyn CredentialsRepository>,
}

/// Non-database collaborators.
pub struct Ports {
    pub clock: Arc<dyn Clock>,
    pub mailer: Arc<dyn CodeMailer>,
    pub codes: Arc<dyn VerificationCodeStore>,
    pub sessions: Arc<dyn SessionStore>,
}

// DI Container - aggregates all domain services
#[derive(Clone)]
pub struct AppServices {
    pub employees: Arc<EmployeesService>,
    pub residents: Arc<ResidentsService>,
    pub attendance: Arc<AttendanceService>,
    pub contracts: Arc<ContractsService>,
    pub consultations: Arc<ConsultationsService>,
    pub assessments: Arc<AssessmentsService>,
    pub auth: Arc<AuthService>,
    pub password_reset: Arc<PasswordResetService>,
}

impl AppServices {
    #[must_use]
    pub fn new(repos: Repositories, ports: Ports, config: &ServiceConfig) -> Self {
        Self {
            employees: Arc::new(EmployeesService::new(repos.employees)),
            residents: Arc::new(ResidentsService::new(repos.residents)),
            attendance: Arc::new(AttendanceService::new(repos.attendance)),
            contracts: Arc::new(ContractsService::new(
                repos.contracts,
                Arc::clone(&ports.clock),
            )),
            consultations: Arc::new(ConsultationsService::new(repos.consultations)),
            assessments: Arc::new(AssessmentsService::new(repos.assessments)),
            auth: Arc::new(AuthService::new(
                Arc::clone(&repos.credentials),
                Arc::clone(&ports.sessions),
                Arc::clone(&ports.clock),
                config.session_ttl,
            )),
            password_reset: Arc::new(PasswordResetService::new(
                repos.credentials,
                ports.codes,
                ports.mailer,
                ports.clock,
                config.code_ttl,
            )),
        }
    }
}
