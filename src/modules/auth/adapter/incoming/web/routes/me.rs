use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::use_cases::fetch_admin::FetchAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MeResponseDto {
    /// Admin ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Email address
    #[schema(example = "admin@example.com")]
    email: String,
}

/// Current admin profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated admin", body = inline(SuccessResponse<MeResponseDto>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "Admin no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn me_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.fetch_admin_use_case.execute(user.admin_id).await {
        Ok(info) => ApiResponse::success(MeResponseDto {
            id: info.id.to_string(),
            email: info.email,
        }),

        Err(FetchAdminError::AdminNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(FetchAdminError::QueryError(ref e)) => {
            error!(error = %e, "Failed to fetch admin profile");
            ApiResponse::internal_error()
        }
    }
}
