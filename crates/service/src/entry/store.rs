use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Fully-resolved fields for a new entry. Timestamp defaulting happens
/// before this struct is built; stores persist it verbatim.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub scheduled_at: DateTimeWithTimeZone,
}

/// Partial field replacement for an existing entry. `None` leaves the stored
/// value untouched; `id` is never updatable.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub scheduled_at: Option<DateTimeWithTimeZone>,
}

/// The persistence boundary: five named calls, nothing else. The store
/// assigns ids on create and does not interpret business rules; any failure
/// is reported as a generic store error.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn create(&self, input: NewEntry) -> Result<models::entry::Model, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::entry::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<models::entry::Model>, ServiceError>;
    /// Fails when `id` has no record.
    async fn update(&self, id: Uuid, patch: EntryPatch) -> Result<models::entry::Model, ServiceError>;
    /// Returns the removed entry; fails when `id` has no record, so a second
    /// delete of the same id is an error.
    async fn delete(&self, id: Uuid) -> Result<models::entry::Model, ServiceError>;
}
