use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::editor::application::domain::commands::EditCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ApplyEditsRequest {
    /// Commands are applied in order
    pub commands: Vec<EditCommand>,
}

#[derive(Serialize, ToSchema)]
pub struct ApplyEditsResponse {
    /// Number of commands that changed the working copy
    pub applied: usize,
    /// Number of commands skipped because their target no longer exists
    pub skipped: usize,
    /// Whether the session now has unsaved changes
    pub dirty: bool,
}

/// Apply edits to the working copy
///
/// Commands targeting a project or skill that no longer exists are skipped
/// and counted, never treated as errors.
#[utoipa::path(
    post,
    path = "/api/editor/commands",
    tag = "editor",
    security(("bearer_auth" = [])),
    request_body = ApplyEditsRequest,
    responses(
        (status = 200, description = "Edits applied", body = inline(SuccessResponse<ApplyEditsResponse>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "No session open", body = ErrorResponse),
    )
)]
#[post("/api/editor/commands")]
pub async fn apply_commands_handler(
    user: AdminUser,
    req: web::Json<ApplyEditsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let commands = req.into_inner().commands;

    match data.editor_sessions.apply(user.admin_id, &commands).await {
        Some(outcome) => {
            debug!(
                admin_id = %user.admin_id,
                applied = outcome.applied,
                skipped = outcome.skipped,
                "Edits applied to session"
            );

            ApiResponse::success(ApplyEditsResponse {
                applied: outcome.applied,
                skipped: outcome.skipped,
                dirty: outcome.dirty,
            })
        }
        None => ApiResponse::not_found("NO_EDITOR_SESSION", "No editing session is open"),
    }
}
