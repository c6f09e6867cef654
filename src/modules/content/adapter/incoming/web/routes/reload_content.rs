use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::domain::document::{default_document, ContentDocument};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ReloadContentResponse {
    pub document: ContentDocument,
    /// True when the last load fell back to defaults because the store failed
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// Reload published content from the store
///
/// Discards the provider's cached document and re-reads the store. Never
/// fails: a broken store yields the defaults plus a degraded flag.
#[utoipa::path(
    post,
    path = "/api/content/reload",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reloaded document", body = inline(SuccessResponse<ReloadContentResponse>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
    )
)]
#[post("/api/content/reload")]
pub async fn reload_content_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    let provider = &data.content_provider;

    provider.load().await;

    let last_error = provider.last_error().await;
    let document = provider.current().await.unwrap_or_else(default_document);

    info!(admin_id = %user.admin_id, degraded = last_error.is_some(), "Content reloaded");
    ApiResponse::success(ReloadContentResponse {
        document,
        degraded: last_error.is_some(),
        last_error,
    })
}
