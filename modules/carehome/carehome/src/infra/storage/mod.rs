//! Storage infrastructure: `SeaORM` repositories over the facility tables.

use sea_orm::sea_query::LikeExpr;
use sea_orm::{DbErr, SqlErr};

use crate::domain::validation::escape_like;

pub mod assessments_repo;
pub mod attendance_repo;
pub mod consultations_repo;
pub mod contracts_repo;
pub mod credentials_repo;
pub mod db;
pub mod employees_repo;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod residents_repo;

pub use assessments_repo::SeaOrmAssessmentsRepository;
pub use attendance_repo::SeaOrmAttendanceRepository;
pub use consultations_repo::SeaOrmConsultationsRepository;
pub use contracts_repo::SeaOrmContractsRepository;
pub use credentials_repo::SeaOrmCredentialsRepository;
pub use db::DbAccessor;
pub use employees_repo::SeaOrmEmployeesRepository;
pub use residents_repo::SeaOrmResidentsRepository;

/// Attempts for `MAX()+1` numbering before giving up with a conflict.
pub const MAX_SEQUENCE_ATTEMPTS: usize = 3;

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// `%term%` with metacharacters escaped.
pub(crate) fn contains(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(term))).escape('\\')
}
