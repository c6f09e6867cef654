use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::domain::document::{default_document, ContentDocument, ContentPatch};
use crate::content::application::provider::UpdateContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::{error, info};

/// Patch published content
///
/// Replaces whole top-level sections of the document: a section present in
/// the body overwrites the stored section entirely, absent sections are kept.
/// There is no deep merge.
#[utoipa::path(
    patch,
    path = "/api/content",
    tag = "content",
    security(("bearer_auth" = [])),
    request_body = ContentPatch,
    responses(
        (status = 200, description = "Updated document", body = inline(SuccessResponse<ContentDocument>)),
        (status = 400, description = "Patch has no sections", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 500, description = "Store rejected the update", body = ErrorResponse),
    )
)]
#[patch("/api/content")]
pub async fn update_content_handler(
    user: AdminUser,
    req: web::Json<ContentPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = req.into_inner();
    let provider = &data.content_provider;

    match provider.update(patch).await {
        Ok(()) => {
            info!(admin_id = %user.admin_id, "Content updated");
            let document = provider.current().await.unwrap_or_else(default_document);
            ApiResponse::success(document)
        }

        Err(UpdateContentError::EmptyPatch) => {
            ApiResponse::bad_request("EMPTY_PATCH", "Patch contains no sections")
        }

        Err(UpdateContentError::StoreError(ref msg)) => {
            error!(admin_id = %user.admin_id, error = %msg, "Content update failed");
            ApiResponse::internal_error_with("UPDATE_FAILED", msg)
        }
    }
}
