use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::domain::document::{default_document, ContentDocument};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionView {
    /// The document as currently edited, including unsaved changes
    pub working_copy: ContentDocument,
    /// Whether the working copy has unsaved changes
    pub dirty: bool,
}

/// Open an editing session
///
/// Starts (or restarts) the caller's editing session from the currently
/// published document. Any previous session for the same admin is discarded.
#[utoipa::path(
    post,
    path = "/api/editor/session",
    tag = "editor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session opened", body = inline(SuccessResponse<SessionView>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
    )
)]
#[post("/api/editor/session")]
pub async fn open_session_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    let provider = &data.content_provider;

    // First session after boot may find the provider empty
    if provider.current().await.is_none() {
        provider.load().await;
    }
    let document = provider.current().await.unwrap_or_else(default_document);

    let session = data.editor_sessions.open(user.admin_id, document).await;

    info!(admin_id = %user.admin_id, "Editing session opened");
    ApiResponse::success(SessionView {
        working_copy: session.working_copy,
        dirty: session.dirty,
    })
}

/// Inspect the current editing session
#[utoipa::path(
    get,
    path = "/api/editor/session",
    tag = "editor",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current session", body = inline(SuccessResponse<SessionView>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "No session open", body = ErrorResponse),
    )
)]
#[get("/api/editor/session")]
pub async fn get_session_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.editor_sessions.get(user.admin_id).await {
        Some(session) => ApiResponse::success(SessionView {
            working_copy: session.working_copy,
            dirty: session.dirty,
        }),
        None => ApiResponse::not_found("NO_EDITOR_SESSION", "No editing session is open"),
    }
}

/// Discard the current editing session
///
/// Unsaved changes are lost. Succeeds even when no session is open.
#[utoipa::path(
    delete,
    path = "/api/editor/session",
    tag = "editor",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
    )
)]
#[delete("/api/editor/session")]
pub async fn close_session_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    data.editor_sessions.close(user.admin_id).await;
    ApiResponse::no_content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::issue_test_token;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_open_session_returns_clean_working_copy() {
        load_test_env();
        let builder = TestAppStateBuilder::default();
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(open_session_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());
        let req = test::TestRequest::post()
            .uri("/api/editor/session")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["dirty"], false);
        assert!(body["data"]["working_copy"]["hero"]["name"].is_string());
    }

    #[actix_web::test]
    async fn test_get_session_without_open_session() {
        load_test_env();
        let builder = TestAppStateBuilder::default();
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(get_session_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());
        let req = test::TestRequest::get()
            .uri("/api/editor/session")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NO_EDITOR_SESSION");
    }

    #[actix_web::test]
    async fn test_close_session_is_idempotent() {
        load_test_env();
        let builder = TestAppStateBuilder::default();
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(close_session_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());

        for _ in 0..2 {
            let req = test::TestRequest::delete()
                .uri("/api/editor/session")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 204);
        }
    }

    #[actix_web::test]
    async fn test_session_requires_auth() {
        load_test_env();
        let builder = TestAppStateBuilder::default();
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(open_session_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/editor/session")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
