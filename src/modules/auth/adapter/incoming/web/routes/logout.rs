use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Admin logout
///
/// Revokes the presented access token and discards any open editing session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Logged out"),
        (
            status = 401,
            description = "Missing, invalid or revoked token",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.logout_admin_use_case.execute(&user.token).await {
        Ok(()) => {
            // A revoked token must not leave an editable working copy behind
            data.editor_sessions.close(user.admin_id).await;

            info!(admin_id = %user.admin_id, "Admin logged out");
            ApiResponse::no_content()
        }

        Err(LogoutError::InvalidToken(ref e)) => {
            error!(error = %e, "Logout failed: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(LogoutError::BlacklistUnavailable(ref e)) => {
            error!(error = %e, "Logout failed: blacklist unavailable");
            ApiResponse::internal_error()
        }
    }
}
