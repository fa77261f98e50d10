//! Schema provisioning for development and test databases.
//!
//! Production tables belong to the facility database and are never touched.

use sea_orm_migration::prelude::*;

mod m20240501_000001_create_carehome_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240501_000001_create_carehome_tables::Migration)]
    }
}
