use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::document::{default_document, ContentDocument};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// Published portfolio content
///
/// Public endpoint, no authentication. Always answers with a document: if the
/// store is unreachable the built-in defaults are served so the site never
/// renders empty.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Published document", body = inline(SuccessResponse<ContentDocument>)),
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    let provider = &data.content_provider;

    if provider.current().await.is_none() {
        provider.load().await;
    }

    let document = provider.current().await.unwrap_or_else(default_document);
    ApiResponse::success(document)
}
