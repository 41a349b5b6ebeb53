use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use portfolio_cms::auth::SessionStore;
use portfolio_cms::config::AppConfig;
use portfolio_cms::handlers;
use portfolio_cms::openapi_config::{configure_openapi, ApiDoc};
use portfolio_cms::repositories::{
    SqliteCaseStudyRepository, SqliteContactRepository, SqliteSettingsRepository,
    SqliteUserRepository,
};
use portfolio_cms::services::{
    CaseStudyService, ContactService, EmailService, SettingsService, UserService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // Initialize database
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL {}", config.database_url))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database initialized");

    // Initialize repositories
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let case_study_repository = Arc::new(SqliteCaseStudyRepository::new(pool.clone()));
    let contact_repository = Arc::new(SqliteContactRepository::new(pool.clone()));
    let settings_repository = Arc::new(SqliteSettingsRepository::new(pool.clone()));

    // Initialize services with dependency injection
    let email_service =
        EmailService::new(config.email.clone()).context("Failed to build email client")?;
    let user_service = web::Data::new(UserService::new(user_repository));
    let case_study_service = web::Data::new(CaseStudyService::new(
        case_study_repository,
        email_service.clone(),
    ));
    let contact_service = web::Data::new(ContactService::new(contact_repository, email_service));
    let settings_service = web::Data::new(SettingsService::new(settings_repository));

    user_service.ensure_admin(&config.admin).await?;

    let sessions = SessionStore::new(pool.clone(), config.session_ttl)
        .with_secure_cookies(config.cookie_secure);
    let pruned = sessions.prune_expired().await?;
    if pruned > 0 {
        tracing::info!(pruned, "Removed expired sessions");
    }
    let sessions = web::Data::new(sessions);

    tracing::info!("Portfolio CMS listening on http://{}", config.bind_address);
    tracing::info!("API Documentation: http://{}/swagger-ui/", config.bind_address);

    // Configure OpenAPI spec with session auth (do this once, outside the closure)
    let openapi_spec = configure_openapi(ApiDoc::openapi());

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .app_data(case_study_service.clone())
            .app_data(contact_service.clone())
            .app_data(settings_service.clone())
            .app_data(sessions.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .configure(handlers::configure)
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
