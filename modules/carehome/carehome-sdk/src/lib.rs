//! Carehome SDK
//!
//! Transport-agnostic record models for the care-facility module. Every
//! record is partitioned by the facility code (`ancd`).

pub mod models;

pub use models::{
    Assessment, AssessmentFilter, Attendance, AttendanceFilter, Consultation, ConsultationDraft,
    ConsultationFilter, Contract, ContractDraft, ContractKey, Employee, EmployeeFilter,
    EmploymentStatus, Resident, ResidentDraft, ResidentFilter, ResidentStatus, UserInfo,
};
