use std::sync::Arc;

use async_trait::async_trait;
use carehome_sdk::{Employee, EmployeeFilter, EmploymentStatus};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use super::db::DbAccessor;
use super::entity::{EmployeeEntity, employee};
use super::mapper::employee_to_active_model;
use super::{contains, is_unique_violation};
use crate::domain::error::DomainError;
use crate::domain::repos::EmployeesRepository;

pub struct SeaOrmEmployeesRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmEmployeesRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }

    fn key(ancd: &str, empno: &str) -> Condition {
        Condition::all()
            .add(employee::Column::Ancd.eq(ancd))
            .add(employee::Column::Empno.eq(empno))
    }
}

#[async_trait]
impl EmployeesRepository for SeaOrmEmployeesRepository {
    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let mut cond = Condition::all().add(employee::Column::Ancd.eq(filter.ancd.as_str()));
        if let Some(name) = filter.name.as_deref() {
            cond = cond.add(employee::Column::Empnm.like(contains(name)));
        }
        match filter.status {
            Some(EmploymentStatus::Active) => cond = cond.add(employee::Column::Outdt.is_null()),
            Some(EmploymentStatus::Retired) => {
                cond = cond.add(employee::Column::Outdt.is_not_null());
            }
            None => {}
        }
        if let Some(job) = filter.job_code.as_deref() {
            cond = cond.add(employee::Column::Jobcd.eq(job));
        }

        let conn = self.db.conn().await?;
        let rows = EmployeeEntity::find()
            .filter(cond)
            .order_by_asc(employee::Column::Empno)
            .all(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, ancd: &str, empno: &str) -> Result<Option<Employee>, DomainError> {
        let conn = self.db.conn().await?;
        let row = EmployeeEntity::find_by_id((ancd.to_owned(), empno.to_owned()))
            .one(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        let conn = self.db.conn().await?;
        let key = format!("{}/{}", employee.ancd, employee.empno);
        match EmployeeEntity::insert(employee_to_active_model(employee.clone()))
            .exec_without_returning(&conn)
            .await
        {
            Ok(_) => Ok(employee),
            Err(e) if is_unique_violation(&e) => Err(DomainError::conflict("employee", key)),
            Err(e) => Err(self.db.fail(e)),
        }
    }

    async fn update(&self, employee: Employee) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let cond = Self::key(&employee.ancd, &employee.empno);
        let res = EmployeeEntity::update_many()
            .set(employee_to_active_model(employee))
            .filter(cond)
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, ancd: &str, empno: &str) -> Result<bool, DomainError> {
        let conn = self.db.conn().await?;
        let res = EmployeeEntity::delete_many()
            .filter(Self::key(ancd, empno))
            .exec(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(res.rows_affected > 0)
    }
}
