use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use models::entry::{self, Entity as EntryEntity};

use crate::entry::store::{EntryPatch, EntryStore, NewEntry};
use crate::errors::ServiceError;

/// SeaORM-backed store implementation over the shared connection handle.
pub struct SeaOrmEntryStore {
    db: DatabaseConnection,
}

impl SeaOrmEntryStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EntryStore for SeaOrmEntryStore {
    async fn create(&self, input: NewEntry) -> Result<entry::Model, ServiceError> {
        entry::create(&self.db, &input.title, &input.description, input.created_at, input.scheduled_at)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError> {
        EntryEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<entry::Model>, ServiceError> {
        EntryEntity::find().all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, id: Uuid, patch: EntryPatch) -> Result<entry::Model, ServiceError> {
        let current = EntryEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Err(ServiceError::not_found("entry")); };
        let mut am: entry::ActiveModel = existing.into();
        if let Some(t) = patch.title { am.title = Set(t); }
        if let Some(d) = patch.description { am.description = Set(d); }
        if let Some(c) = patch.created_at { am.created_at = Set(c); }
        if let Some(s) = patch.scheduled_at { am.scheduled_at = Set(s); }
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<entry::Model, ServiceError> {
        let current = EntryEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Err(ServiceError::not_found("entry")); };
        let res = EntryEntity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("entry"));
        }
        Ok(existing)
    }
}
