use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct EntryDoc {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub scheduled_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateEntryInputDoc {
    pub title: String,
    pub description: String,
    pub created_at: Option<String>,
    pub scheduled_at: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateEntryInputDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub scheduled_at: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct MsgDoc { pub msg: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::entries::create_entry,
        crate::routes::entries::list_entries,
        crate::routes::entries::get_entry,
        crate::routes::entries::update_entry,
        crate::routes::entries::delete_entry,
    ),
    components(
        schemas(
            HealthResponse,
            EntryDoc,
            CreateEntryInputDoc,
            UpdateEntryInputDoc,
            MsgDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "entries")
    )
)]
pub struct ApiDoc;
