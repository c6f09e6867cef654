use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::editor::application::domain::commands::{EditCommand, ProjectField};
use crate::media::application::use_cases::upload_image::UploadImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

/// Where the uploaded image URL should land in the caller's editing session.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageTarget {
    /// Replace the image of the project at `index` in the working copy
    ProjectImage { index: usize },
}

#[derive(Deserialize, ToSchema)]
pub struct UploadImageRequest {
    /// Original file name, kept as the object name suffix
    #[schema(example = "screenshot.png")]
    pub file_name: String,

    /// MIME type of the payload
    #[schema(example = "image/png")]
    pub content_type: String,

    /// Base64 encoded file contents (standard alphabet, padded)
    pub data: String,

    /// Optional editing-session target for the resulting URL
    #[serde(default)]
    pub target: Option<ImageTarget>,
}

#[derive(Serialize, ToSchema)]
pub struct UploadImageResponse {
    /// Public URL of the stored image
    pub url: String,

    /// Whether the URL was written into the caller's editing session
    pub applied_to_session: bool,
}

/// Upload an image
///
/// Stores the image in the public assets bucket and returns its URL. When a
/// target is given and the caller has an open editing session, the URL is
/// also written into the working copy.
#[utoipa::path(
    post,
    path = "/api/media/upload",
    tag = "media",
    security(("bearer_auth" = [])),
    request_body = UploadImageRequest,
    responses(
        (status = 200, description = "Image stored", body = inline(SuccessResponse<UploadImageResponse>)),
        (status = 400, description = "Undecodable payload", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/media/upload")]
pub async fn upload_image_handler(
    user: AdminUser,
    req: web::Json<UploadImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    let bytes = match general_purpose::STANDARD.decode(&request.data) {
        Ok(bytes) => bytes,
        Err(_) => {
            return ApiResponse::bad_request("INVALID_PAYLOAD", "File data is not valid base64");
        }
    };

    let url = match data
        .upload_image_use_case
        .execute(&request.file_name, &request.content_type, bytes)
        .await
    {
        Ok(url) => url,
        Err(UploadImageError::EmptyFileName) => {
            return ApiResponse::bad_request("INVALID_PAYLOAD", "File name cannot be empty");
        }
        Err(UploadImageError::StorageError(ref msg)) => {
            error!(error = %msg, "Image upload failed");
            return ApiResponse::internal_error_with("UPLOAD_FAILED", msg);
        }
    };

    let applied_to_session = match request.target {
        Some(ImageTarget::ProjectImage { index }) => {
            let command = EditCommand::SetProject {
                index,
                field: ProjectField::Image,
                value: url.clone(),
            };
            data.editor_sessions
                .apply(user.admin_id, std::slice::from_ref(&command))
                .await
                .map(|outcome| outcome.applied == 1)
                .unwrap_or(false)
        }
        None => false,
    };

    info!(admin_id = %user.admin_id, url = %url, "Image uploaded");
    ApiResponse::success(UploadImageResponse {
        url,
        applied_to_session,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::document::default_document;
    use crate::media::application::use_cases::upload_image::IUploadImageUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::issue_test_token;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockUploadSuccess;

    #[async_trait]
    impl IUploadImageUseCase for MockUploadSuccess {
        async fn execute(
            &self,
            file_name: &str,
            _content_type: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, UploadImageError> {
            Ok(format!(
                "https://storage.googleapis.com/portfolio-assets/portfolio/1756400000000_{}",
                file_name
            ))
        }
    }

    #[derive(Clone)]
    struct MockUploadFailure;

    #[async_trait]
    impl IUploadImageUseCase for MockUploadFailure {
        async fn execute(
            &self,
            _file_name: &str,
            _content_type: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, UploadImageError> {
            Err(UploadImageError::StorageError("bucket unreachable".to_string()))
        }
    }

    fn upload_json(target: Option<serde_json::Value>) -> serde_json::Value {
        let mut body = serde_json::json!({
            "file_name": "photo.png",
            "content_type": "image/png",
            "data": general_purpose::STANDARD.encode(b"fake-png-bytes"),
        });
        if let Some(target) = target {
            body["target"] = target;
        }
        body
    }

    #[actix_web::test]
    async fn test_upload_returns_public_url() {
        load_test_env();
        let builder = TestAppStateBuilder::default().with_upload_image(MockUploadSuccess);
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(upload_image_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());
        let req = test::TestRequest::post()
            .uri("/api/media/upload")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(upload_json(None))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["url"]
            .as_str()
            .unwrap()
            .ends_with("_photo.png"));
        assert_eq!(body["data"]["applied_to_session"], false);
    }

    #[actix_web::test]
    async fn test_upload_applies_url_to_project_in_session() {
        load_test_env();
        let builder = TestAppStateBuilder::default().with_upload_image(MockUploadSuccess);
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();
        let sessions = app_state.editor_sessions.clone();

        let admin_id = Uuid::new_v4();
        sessions.open(admin_id, default_document()).await;

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(upload_image_handler),
        )
        .await;

        let token = issue_test_token(admin_id);
        let req = test::TestRequest::post()
            .uri("/api/media/upload")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(upload_json(Some(serde_json::json!({
                "kind": "project_image",
                "index": 0
            }))))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["applied_to_session"], true);

        let session = sessions.get(admin_id).await.unwrap();
        assert!(session.working_copy.projects[0]
            .image
            .ends_with("_photo.png"));
        assert!(session.dirty);
    }

    #[actix_web::test]
    async fn test_upload_target_without_session_is_not_applied() {
        load_test_env();
        let builder = TestAppStateBuilder::default().with_upload_image(MockUploadSuccess);
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(upload_image_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());
        let req = test::TestRequest::post()
            .uri("/api/media/upload")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(upload_json(Some(serde_json::json!({
                "kind": "project_image",
                "index": 0
            }))))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["applied_to_session"], false);
    }

    #[actix_web::test]
    async fn test_upload_rejects_invalid_base64() {
        load_test_env();
        let builder = TestAppStateBuilder::default().with_upload_image(MockUploadSuccess);
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(upload_image_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());
        let req = test::TestRequest::post()
            .uri("/api/media/upload")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "file_name": "photo.png",
                "content_type": "image/png",
                "data": "@@not-base64@@"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_PAYLOAD");
    }

    #[actix_web::test]
    async fn test_upload_storage_failure() {
        load_test_env();
        let builder = TestAppStateBuilder::default().with_upload_image(MockUploadFailure);
        let (token_provider_data, blacklist_data) = builder.auth_app_data();
        let app_state = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data)
                .app_data(blacklist_data)
                .service(upload_image_handler),
        )
        .await;

        let token = issue_test_token(Uuid::new_v4());
        let req = test::TestRequest::post()
            .uri("/api/media/upload")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(upload_json(None))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPLOAD_FAILED");
        assert_eq!(body["error"]["message"], "bucket unreachable");
    }
}
