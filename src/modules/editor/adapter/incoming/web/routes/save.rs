use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::domain::document::default_document;
use crate::content::application::provider::UpdateContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::session::SessionView;

/// Save the working copy
///
/// Submits the whole working copy to the content store, reloads the published
/// document and resets the session onto it. On failure the session keeps its
/// unsaved changes so nothing is lost.
#[utoipa::path(
    post,
    path = "/api/editor/save",
    tag = "editor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Saved and reloaded", body = inline(SuccessResponse<SessionView>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "No session open", body = ErrorResponse),
        (status = 500, description = "Store rejected the update", body = ErrorResponse),
    )
)]
#[post("/api/editor/save")]
pub async fn save_session_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    let sessions = &data.editor_sessions;
    let provider = &data.content_provider;

    let session = match sessions.get(user.admin_id).await {
        Some(session) => session,
        None => {
            return ApiResponse::not_found("NO_EDITOR_SESSION", "No editing session is open");
        }
    };

    if let Err(err) = provider.update(session.to_patch()).await {
        // Session stays intact, the admin can retry
        match err {
            UpdateContentError::EmptyPatch => {
                return ApiResponse::bad_request("EMPTY_PATCH", "Nothing to save");
            }
            UpdateContentError::StoreError(ref msg) => {
                error!(admin_id = %user.admin_id, error = %msg, "Saving session failed");
                return ApiResponse::internal_error_with("UPDATE_FAILED", msg);
            }
        }
    }

    // Re-read what the store actually holds before handing the admin a
    // fresh working copy
    provider.load().await;
    let document = provider.current().await.unwrap_or_else(default_document);

    match sessions.reset(user.admin_id, document).await {
        Some(session) => {
            info!(admin_id = %user.admin_id, "Session saved and reloaded");
            ApiResponse::success(SessionView {
                working_copy: session.working_copy,
                dirty: session.dirty,
            })
        }
        // Session vanished between save and reset (logout race)
        None => ApiResponse::not_found("NO_EDITOR_SESSION", "No editing session is open"),
    }
}
