pub mod auth;
pub mod case_studies;
pub mod contact;
pub mod messages;
pub mod settings;

// Re-export all handler functions for easy importing
pub use auth::*;
pub use case_studies::*;
pub use contact::*;
pub use messages::*;
pub use settings::*;

use crate::models::{FieldError, ServiceError};
use actix_web::web;

/// Registers every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login_api))
                .route("/logout", web::post().to(logout_api))
                .route("/user", web::get().to(current_user_api))
                .route("/contact", web::post().to(submit_contact))
                .route("/case-studies", web::get().to(list_case_studies))
                .route("/case-studies/{slug}", web::get().to(get_case_study_by_slug))
                .service(
                    web::scope("/admin")
                        .service(
                            web::resource("/case-studies")
                                .route(web::get().to(admin_list_case_studies))
                                .route(web::post().to(create_case_study)),
                        )
                        .service(
                            web::resource("/case-studies/{id}")
                                .route(web::get().to(admin_get_case_study))
                                .route(web::put().to(update_case_study))
                                .route(web::delete().to(delete_case_study)),
                        )
                        .route("/messages", web::get().to(list_messages))
                        .service(
                            web::resource("/messages/{id}")
                                .route(web::get().to(get_message))
                                .route(web::delete().to(delete_message)),
                        )
                        .route("/messages/{id}/read", web::put().to(mark_message_read))
                        .route("/settings", web::get().to(list_settings))
                        // GET treats the segment as a category, PUT as a key
                        .service(
                            web::resource("/settings/{name}")
                                .route(web::get().to(list_settings_by_category))
                                .route(web::put().to(save_setting)),
                        ),
                ),
        );
}

/// Undecodable JSON bodies get the same 400 envelope as validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::invalid(
            "Invalid request body",
            vec![FieldError::new("body", err.to_string())],
        )
        .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ServiceError::invalid(
            "Invalid query parameters",
            vec![FieldError::new("query", err.to_string())],
        )
        .into()
    })
}
