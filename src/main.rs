pub mod modules;
pub use modules::auth;
pub use modules::content;
pub use modules::editor;
pub use modules::media;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::application::use_cases::{
    fetch_admin::{FetchAdminUseCase, IFetchAdminUseCase},
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::content::application::provider::ContentProvider;
use crate::editor::application::sessions::EditorSessions;
use crate::media::application::use_cases::upload_image::{IUploadImageUseCase, UploadImageUseCase};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content_provider: Arc<ContentProvider>,
    pub editor_sessions: Arc<EditorSessions>,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub fetch_admin_use_case: Arc<dyn IFetchAdminUseCase + Send + Sync>,
    pub upload_image_use_case: Arc<dyn IUploadImageUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
    use crate::content::adapter::outgoing::document_store_postgres::DocumentStorePostgres;
    use crate::content::application::ports::outgoing::DocumentStore;
    use crate::media::adapter::outgoing::blob_storage_gcs::GcsBlobStorage;
    use crate::media::application::ports::outgoing::BlobStorage;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let gcs_bucket = env::var("GCS_BUCKET").expect("GCS_BUCKET is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    // Content store and provider
    let document_store: Arc<dyn DocumentStore> =
        Arc::new(DocumentStorePostgres::new(Arc::clone(&db_arc)));
    let content_provider = Arc::new(ContentProvider::new(document_store));
    content_provider.load().await;

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher = Argon2Hasher::from_env();
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
    let token_blacklist: Arc<dyn TokenBlacklist + Send + Sync> =
        Arc::new(RedisTokenBlacklist::new(redis_pool.clone()));

    let login_admin_use_case = LoginAdminUseCase::new(
        admin_query.clone(),
        Arc::new(argon2_password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let logout_admin_use_case = LogoutAdminUseCase::new(
        Arc::new(jwt_service.clone()),
        Arc::clone(&token_blacklist),
    );
    let fetch_admin_use_case = FetchAdminUseCase::new(admin_query);

    // Media components
    let blob_storage: Arc<dyn BlobStorage> = Arc::new(GcsBlobStorage::new(gcs_bucket));
    let upload_image_use_case = UploadImageUseCase::new(blob_storage);

    let state = AppState {
        content_provider,
        editor_sessions: Arc::new(EditorSessions::new()),
        login_admin_use_case: Arc::new(login_admin_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
        fetch_admin_use_case: Arc::new(fetch_admin_use_case),
        upload_image_use_case: Arc::new(upload_image_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&token_blacklist)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(redis_pool.clone()))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::me_handler);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::reload_content_handler);
    // Editor
    cfg.service(crate::editor::adapter::incoming::web::routes::open_session_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::close_session_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::apply_commands_handler);
    cfg.service(crate::editor::adapter::incoming::web::routes::save_session_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_image_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
