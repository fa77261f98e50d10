use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::EntityTrait;

use super::db::DbAccessor;
use super::entity::CredentialEntity;
use crate::domain::error::DomainError;
use crate::domain::repos::{CredentialsRepository, StoredCredential};

pub struct SeaOrmCredentialsRepository {
    db: Arc<DbAccessor>,
}

impl SeaOrmCredentialsRepository {
    #[must_use]
    pub fn new(db: Arc<DbAccessor>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialsRepository for SeaOrmCredentialsRepository {
    async fn find(&self, ancd: &str, uid: &str) -> Result<Option<StoredCredential>, DomainError> {
        let conn = self.db.conn().await?;
        let row = CredentialEntity::find_by_id((ancd.to_owned(), uid.to_owned()))
            .one(&conn)
            .await
            .map_err(|e| self.db.fail(e))?;
        Ok(row.map(Into::into))
    }
}
