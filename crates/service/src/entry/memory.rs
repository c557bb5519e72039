use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::entry;

use crate::entry::store::{EntryPatch, EntryStore, NewEntry};
use crate::errors::ServiceError;

/// In-memory entry store keeping insertion order.
///
/// Backs tests and local development where a database is overkill; semantics
/// match the SeaORM store (id assigned on create, update/delete fail on a
/// missing id).
#[derive(Clone, Default)]
pub struct MemoryEntryStore {
    inner: Arc<RwLock<Vec<entry::Model>>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn create(&self, input: NewEntry) -> Result<entry::Model, ServiceError> {
        let model = entry::Model {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            created_at: input.created_at,
            scheduled_at: input.scheduled_at,
        };
        let mut rows = self.inner.write().await;
        rows.push(model.clone());
        Ok(model)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<entry::Model>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows.clone())
    }

    async fn update(&self, id: Uuid, patch: EntryPatch) -> Result<entry::Model, ServiceError> {
        let mut rows = self.inner.write().await;
        let Some(row) = rows.iter_mut().find(|m| m.id == id) else {
            return Err(ServiceError::not_found("entry"));
        };
        if let Some(t) = patch.title { row.title = t; }
        if let Some(d) = patch.description { row.description = d; }
        if let Some(c) = patch.created_at { row.created_at = c; }
        if let Some(s) = patch.scheduled_at { row.scheduled_at = s; }
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<entry::Model, ServiceError> {
        let mut rows = self.inner.write().await;
        let Some(pos) = rows.iter().position(|m| m.id == id) else {
            return Err(ServiceError::not_found("entry"));
        };
        Ok(rows.remove(pos))
    }
}
