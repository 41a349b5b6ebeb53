#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::{test, web, App};
use chrono::Duration;
use serde_json::json;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tempfile::TempDir;
use portfolio_cms::{
    auth::{SessionStore, SESSION_COOKIE},
    config::EmailConfig,
    handlers,
    repositories::{
        SqliteCaseStudyRepository, SqliteContactRepository, SqliteSettingsRepository,
        SqliteUserRepository,
    },
    services::{CaseStudyService, ContactService, EmailService, SettingsService, UserService},
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const EDITOR_USERNAME: &str = "editor";
pub const EDITOR_PASSWORD: &str = "editor-password";

pub struct TestApp {
    pub pool: SqlitePool,
    pub sessions: SessionStore,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        // Create connection pool
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to create database pool");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let users = UserService::new(Arc::new(SqliteUserRepository::new(pool.clone())));
        users
            .create_user(ADMIN_USERNAME, ADMIN_PASSWORD, "admin@example.com", true)
            .await
            .expect("Failed to seed admin user");
        users
            .create_user(EDITOR_USERNAME, EDITOR_PASSWORD, "editor@example.com", false)
            .await
            .expect("Failed to seed editor user");

        let sessions = SessionStore::new(pool.clone(), Duration::hours(1));

        Self {
            pool,
            sessions,
            temp_dir,
        }
    }

    /// Email delivery is unconfigured so notifications are logged no-ops.
    pub fn email_service(&self) -> EmailService {
        EmailService::new(EmailConfig::default()).expect("Failed to build email client")
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        // Initialize repositories
        let user_repository = Arc::new(SqliteUserRepository::new(self.pool.clone()));
        let case_study_repository = Arc::new(SqliteCaseStudyRepository::new(self.pool.clone()));
        let contact_repository = Arc::new(SqliteContactRepository::new(self.pool.clone()));
        let settings_repository = Arc::new(SqliteSettingsRepository::new(self.pool.clone()));

        // Initialize services
        let user_service = web::Data::new(UserService::new(user_repository));
        let case_study_service = web::Data::new(CaseStudyService::new(
            case_study_repository,
            self.email_service(),
        ));
        let contact_service = web::Data::new(ContactService::new(
            contact_repository,
            self.email_service(),
        ));
        let settings_service = web::Data::new(SettingsService::new(settings_repository));

        App::new()
            .app_data(user_service)
            .app_data(case_study_service)
            .app_data(contact_service)
            .app_data(settings_service)
            .app_data(web::Data::new(self.sessions.clone()))
            .configure(handlers::configure)
    }

    pub async fn login(&self, username: &str, password: &str) -> Cookie<'static> {
        let app = test::init_service(self.create_app()).await;

        let login_req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({
                "username": username,
                "password": password
            }))
            .to_request();

        let resp = test::call_service(&app, login_req).await;
        assert!(resp.status().is_success(), "login failed: {}", resp.status());

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("Login response did not set a session cookie");
        cookie.into_owned()
    }

    pub async fn admin_cookie(&self) -> Cookie<'static> {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    pub async fn count_rows(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

pub fn case_study_json(slug: &str) -> serde_json::Value {
    json!({
        "title": format!("Case study {}", slug),
        "slug": slug,
        "excerpt": "Short summary",
        "description": "Long form description",
        "coverImage": "https://cdn.example.com/cover.png",
        "clientName": "Acme Corp",
        "services": ["Design", "Engineering"],
        "technologies": ["Rust", "SQLite"]
    })
}
