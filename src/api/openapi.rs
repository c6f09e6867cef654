use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginAdminInfo, LoginRequestDto, LoginResponseDto, MeResponseDto,
};

// Content
use crate::content::adapter::incoming::web::routes::ReloadContentResponse;
use crate::content::application::domain::document::{
    About, Contact, ContentDocument, ContentPatch, Feature, Footer, Hero, Navbar, Project, Skill,
    SkillCategory, SocialLinks,
};

// Editor
use crate::editor::adapter::incoming::web::routes::{
    ApplyEditsRequest, ApplyEditsResponse, SessionView,
};
use crate::editor::application::domain::commands::{
    AboutField, ContactField, EditCommand, FeatureField, HeroField, ProjectField, SocialLink,
};

// Media
use crate::media::adapter::incoming::web::routes::{
    ImageTarget, UploadImageRequest, UploadImageResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for the portfolio website and its content dashboard",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,
        crate::auth::adapter::incoming::web::routes::me_handler,

        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_content_handler,
        crate::content::adapter::incoming::web::routes::update_content_handler,
        crate::content::adapter::incoming::web::routes::reload_content_handler,

        // Editor endpoints
        crate::editor::adapter::incoming::web::routes::open_session_handler,
        crate::editor::adapter::incoming::web::routes::get_session_handler,
        crate::editor::adapter::incoming::web::routes::close_session_handler,
        crate::editor::adapter::incoming::web::routes::apply_commands_handler,
        crate::editor::adapter::incoming::web::routes::save_session_handler,

        // Media endpoints
        crate::media::adapter::incoming::web::routes::upload_image_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ContentDocument>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponseDto,
            LoginAdminInfo,
            MeResponseDto,

            // Content document
            ContentDocument,
            ContentPatch,
            Hero,
            SocialLinks,
            About,
            Feature,
            SkillCategory,
            Skill,
            Project,
            Contact,
            Navbar,
            Footer,
            ReloadContentResponse,

            // Editor DTOs
            SessionView,
            ApplyEditsRequest,
            ApplyEditsResponse,
            EditCommand,
            HeroField,
            SocialLink,
            AboutField,
            FeatureField,
            ContactField,
            ProjectField,

            // Media DTOs
            UploadImageRequest,
            UploadImageResponse,
            ImageTarget
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication endpoints"),
        (name = "content", description = "Published portfolio content endpoints"),
        (name = "editor", description = "Dashboard editing session endpoints"),
        (name = "media", description = "Image upload endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}
