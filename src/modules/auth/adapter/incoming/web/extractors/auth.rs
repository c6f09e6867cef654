use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Represents an authenticated dashboard admin
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub admin_id: Uuid,
    /// The raw bearer token, kept so logout can revoke it
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    // Revocation check hits Redis, so the extractor has to be async
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned();
        let blacklist = req
            .app_data::<actix_web::web::Data<Arc<dyn TokenBlacklist + Send + Sync>>>()
            .cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (token_provider, blacklist) = match (token_provider, blacklist) {
                (Some(tp), Some(bl)) => (tp, bl),
                _ => return Err(create_api_error(ApiResponse::internal_error())),
            };

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = token_provider.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            })?;

            if claims.token_type != "access" {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            match blacklist.is_revoked(&token).await {
                Ok(false) => Ok(AdminUser {
                    admin_id: claims.sub,
                    token,
                }),
                Ok(true) => Err(create_api_error(ApiResponse::unauthorized(
                    "TOKEN_REVOKED",
                    "Token has been revoked",
                ))),
                Err(err) => {
                    tracing::error!("Token revocation check failed: {}", err);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
