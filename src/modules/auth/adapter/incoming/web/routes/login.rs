use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde::Serialize;
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from the dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponseDto {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Authenticated admin information
    admin: LoginAdminInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAdminInfo {
    /// Admin ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Email address
    #[schema(example = "admin@example.com")]
    email: String,
}

/// Admin login
///
/// Authenticates a dashboard admin with email and password, returns a JWT access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponseDto>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "admin": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "admin@example.com"
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_admin_use_case;
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(
                admin_id = %response.admin.id,
                email = %response.admin.email,
                "Admin logged in successfully"
            );

            ApiResponse::success(LoginResponseDto {
                access_token: response.access_token,
                admin: LoginAdminInfo {
                    id: response.admin.id.to_string(),
                    email: response.admin.email,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
