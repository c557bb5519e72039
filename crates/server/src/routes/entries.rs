use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use common::types::Ack;
use service::entry::EntryPatch;

use crate::errors::{ApiError, EntryApiError};
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateEntryInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct UpdateEntryInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub scheduled_at: Option<DateTime<FixedOffset>>,
}

impl From<UpdateEntryInput> for EntryPatch {
    fn from(input: UpdateEntryInput) -> Self {
        EntryPatch {
            title: input.title,
            description: input.description,
            created_at: input.created_at,
            scheduled_at: input.scheduled_at,
        }
    }
}

#[utoipa::path(
    post, path = "/create/", tag = "entries",
    request_body = crate::openapi::CreateEntryInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_entry(
    State(state): State<ServerState>,
    Json(input): Json<CreateEntryInput>,
) -> Result<Json<models::entry::Model>, EntryApiError> {
    match state
        .entries
        .create(input.title, input.description, input.created_at, input.scheduled_at)
        .await
    {
        Ok(m) => {
            info!(id = %m.id, "created entry");
            Ok(Json(m))
        }
        Err(e) => {
            error!(err = %e, "create entry failed");
            Err(EntryApiError::Create)
        }
    }
}

#[utoipa::path(
    get, path = "/get/", tag = "entries",
    responses((status = 200, description = "List OK"))
)]
pub async fn list_entries(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::entry::Model>>, ApiError> {
    let entries = state.entries.list().await.map_err(|e| ApiError(e.to_string()))?;
    info!(count = entries.len(), "list entries");
    Ok(Json(entries))
}

#[utoipa::path(
    get, path = "/get/{id}", tag = "entries",
    params(("id" = String, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Find Failed")
    )
)]
pub async fn get_entry(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<models::entry::Model>, EntryApiError> {
    match state.entries.get(&id).await {
        Ok(m) => Ok(Json(m)),
        Err(e) => {
            error!(id = %id, err = %e, "get entry failed");
            Err(EntryApiError::Find)
        }
    }
}

#[utoipa::path(
    put, path = "/update/{id}", tag = "entries",
    params(("id" = String, Path, description = "Entry ID")),
    request_body = crate::openapi::UpdateEntryInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update_entry(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEntryInput>,
) -> Result<Json<Ack>, EntryApiError> {
    match state.entries.update(&id, input.into()).await {
        Ok(m) => {
            info!(id = %m.id, "updated entry");
            Ok(Json(Ack { msg: "Updated successfully" }))
        }
        Err(e) => {
            error!(id = %id, err = %e, "update entry failed");
            Err(EntryApiError::Update)
        }
    }
}

#[utoipa::path(
    delete, path = "/delete/{id}", tag = "entries",
    params(("id" = String, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_entry(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, EntryApiError> {
    match state.entries.delete(&id).await {
        Ok(m) => {
            info!(id = %m.id, "deleted entry");
            Ok(Json(Ack { msg: "Deleted successfully" }))
        }
        Err(e) => {
            error!(id = %id, err = %e, "delete entry failed");
            Err(EntryApiError::Delete)
        }
    }
}
