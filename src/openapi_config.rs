use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityRequirement, SecurityScheme};
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::OpenApi;

use crate::auth::SESSION_COOKIE;
use crate::handlers;
use crate::models::{
    ApiResponse, CaseStudy, CaseStudyInput, ContactForm, ContactMessage, ContactResponse,
    ErrorResponse, FieldError, LoginForm, LoginResponse, SettingForm, SiteSetting,
    SuccessResponse, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login_api,
        handlers::auth::logout_api,
        handlers::auth::current_user_api,
        handlers::contact::submit_contact,
        handlers::case_studies::list_case_studies,
        handlers::case_studies::get_case_study_by_slug,
        handlers::case_studies::admin_list_case_studies,
        handlers::case_studies::admin_get_case_study,
        handlers::case_studies::create_case_study,
        handlers::case_studies::update_case_study,
        handlers::case_studies::delete_case_study,
        handlers::messages::list_messages,
        handlers::messages::get_message,
        handlers::messages::mark_message_read,
        handlers::messages::delete_message,
        handlers::settings::list_settings,
        handlers::settings::list_settings_by_category,
        handlers::settings::save_setting,
    ),
    components(schemas(
        ApiResponse,
        CaseStudy,
        CaseStudyInput,
        ContactForm,
        ContactMessage,
        ContactResponse,
        ErrorResponse,
        FieldError,
        LoginForm,
        LoginResponse,
        SettingForm,
        SiteSetting,
        SuccessResponse,
        User,
    )),
    info(title = "Portfolio CMS API", description = "Case studies, contact form and site settings")
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: OpenApiSpec) -> OpenApiSpec {
    // Admin routes authenticate with the session cookie set by /api/login
    if let Some(components) = openapi.components.as_mut() {
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }

    // Applies to every endpoint without its own security() override
    openapi.security = Some(vec![SecurityRequirement::new(
        "session_cookie",
        Vec::<String>::new(),
    )]);

    openapi
}
