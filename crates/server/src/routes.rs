use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::entry::EntryService;

pub mod entries;

/// Process-wide request state: the entry service over the store handle
/// acquired once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub entries: EntryService,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service alive"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: entry CRUD, health, docs.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/create/", post(entries::create_entry))
        .route("/get/", get(entries::list_entries))
        .route("/get/:id", get(entries::get_entry))
        .route("/update/:id", put(entries::update_entry))
        .route("/delete/:id", delete(entries::delete_entry))
        .route("/health", get(health))
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
