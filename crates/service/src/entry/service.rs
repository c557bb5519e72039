use std::sync::Arc;

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::instrument;
use uuid::Uuid;

use models::entry;

use crate::entry::store::{EntryPatch, EntryStore, NewEntry};
use crate::errors::ServiceError;

/// Application service for entries: applies timestamp defaulting and invokes
/// the matching store operation. Stateless between calls; the store handle
/// is the only shared resource.
#[derive(Clone)]
pub struct EntryService {
    store: Arc<dyn EntryStore>,
}

impl EntryService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self { Self { store } }

    /// Create with policy: each omitted timestamp defaults to "now",
    /// resolved independently at the moment of the call.
    #[instrument(skip(self, title, description))]
    pub async fn create(
        &self,
        title: String,
        description: String,
        created_at: Option<DateTimeWithTimeZone>,
        scheduled_at: Option<DateTimeWithTimeZone>,
    ) -> Result<entry::Model, ServiceError> {
        let created_at = created_at.unwrap_or_else(|| Utc::now().into());
        let scheduled_at = scheduled_at.unwrap_or_else(|| Utc::now().into());
        self.store
            .create(NewEntry { title, description, created_at, scheduled_at })
            .await
    }

    pub async fn list(&self) -> Result<Vec<entry::Model>, ServiceError> {
        self.store.find_all().await
    }

    /// Single-entry lookup. A missing record is a failure here, same as a
    /// store error; callers cannot tell the two apart.
    pub async fn get(&self, id: &str) -> Result<entry::Model, ServiceError> {
        let id = parse_id(id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("entry"))
    }

    pub async fn update(&self, id: &str, patch: EntryPatch) -> Result<entry::Model, ServiceError> {
        let id = parse_id(id)?;
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<entry::Model, ServiceError> {
        let id = parse_id(id)?;
        self.store.delete(id).await
    }
}

// An id that does not parse cannot match any stored record.
fn parse_id(id: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(id).map_err(|_| ServiceError::not_found("entry"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::memory::MemoryEntryStore;
    use chrono::{DateTime, Utc};

    fn service() -> EntryService {
        EntryService::new(Arc::new(MemoryEntryStore::new()))
    }

    #[tokio::test]
    async fn create_keeps_supplied_timestamps() -> Result<(), anyhow::Error> {
        let svc = service();
        let created: DateTimeWithTimeZone = "2024-07-11T00:00:00+00:00".parse().unwrap();
        let scheduled: DateTimeWithTimeZone = "2024-07-12T00:00:00+00:00".parse().unwrap();

        let m = svc
            .create("T".into(), "D".into(), Some(created), Some(scheduled))
            .await?;
        assert_eq!(m.created_at, created);
        assert_eq!(m.scheduled_at, scheduled);
        Ok(())
    }

    #[tokio::test]
    async fn create_defaults_omitted_timestamps_to_now() -> Result<(), anyhow::Error> {
        let svc = service();
        let before: DateTime<Utc> = Utc::now();
        let m = svc.create("T".into(), "D".into(), None, None).await?;
        let after: DateTime<Utc> = Utc::now();

        let created = m.created_at.with_timezone(&Utc);
        let scheduled = m.scheduled_at.with_timezone(&Utc);
        assert!(created >= before && created <= after);
        assert!(scheduled >= before && scheduled <= after);
        Ok(())
    }

    #[tokio::test]
    async fn create_defaults_each_timestamp_independently() -> Result<(), anyhow::Error> {
        let svc = service();
        let scheduled: DateTimeWithTimeZone = "2030-01-01T08:00:00+00:00".parse().unwrap();
        let before: DateTime<Utc> = Utc::now();
        let m = svc.create("T".into(), "D".into(), None, Some(scheduled)).await?;
        let after: DateTime<Utc> = Utc::now();

        let created = m.created_at.with_timezone(&Utc);
        assert!(created >= before && created <= after);
        assert_eq!(m.scheduled_at, scheduled);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_or_malformed_id_fails() -> Result<(), anyhow::Error> {
        let svc = service();
        assert!(svc.get(&Uuid::new_v4().to_string()).await.is_err());
        // unparsable ids take the same failure path as missing records
        assert!(svc.get("1").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn full_lifecycle() -> Result<(), anyhow::Error> {
        let svc = service();
        let m = svc.create("T".into(), "D".into(), None, None).await?;

        let fetched = svc.get(&m.id.to_string()).await?;
        assert_eq!(fetched, m);

        let patch = EntryPatch { title: Some("T2".into()), ..Default::default() };
        let updated = svc.update(&m.id.to_string(), patch).await?;
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.description, "D");

        let removed = svc.delete(&m.id.to_string()).await?;
        assert_eq!(removed.id, m.id);
        assert!(svc.get(&m.id.to_string()).await.is_err());
        assert!(svc.delete(&m.id.to_string()).await.is_err());
        Ok(())
    }
}
