use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::infra::storage::entity::{
    AssessmentEntity, AttendanceEntity, ConsultationEntity, ContractEntity, CredentialEntity,
    EmployeeEntity, ResidentEntity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

impl Migration {
    async fn create<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());
        manager
            .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
            .await
    }

    async fn drop<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(entity).if_exists().to_owned())
            .await
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Self::create(manager, CredentialEntity).await?;
        Self::create(manager, EmployeeEntity).await?;
        Self::create(manager, AttendanceEntity).await?;
        Self::create(manager, ResidentEntity).await?;
        Self::create(manager, ContractEntity).await?;
        Self::create(manager, ConsultationEntity).await?;
        Self::create(manager, AssessmentEntity).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Self::drop(manager, AssessmentEntity).await?;
        Self::drop(manager, ConsultationEntity).await?;
        Self::drop(manager, ContractEntity).await?;
        Self::drop(manager, ResidentEntity).await?;
        Self::drop(manager, AttendanceEntity).await?;
        Self::drop(manager, EmployeeEntity).await?;
        Self::drop(manager, CredentialEntity).await
    }
}
