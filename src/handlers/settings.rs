use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::auth::SessionStore;
use crate::middleware::auth::require_admin;
use crate::models::{ServiceError, SettingForm};
use crate::services::SettingsService;

#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses(
        (status = 200, description = "All settings ordered by category then key", body = [SiteSetting]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_settings(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    settings_service: web::Data<SettingsService>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let settings = settings_service.get_all_settings().await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings/{category}",
    params(
        ("category" = String, Path, description = "Setting category")
    ),
    responses(
        (status = 200, description = "Settings in the category ordered by key", body = [SiteSetting]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_settings_by_category(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    settings_service: web::Data<SettingsService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let settings = settings_service
        .get_settings_by_category(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = SettingForm,
    responses(
        (status = 200, description = "Setting created or updated", body = SiteSetting),
        (status = 400, description = "Invalid setting data", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn save_setting(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    settings_service: web::Data<SettingsService>,
    path: web::Path<String>,
    form: web::Json<SettingForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let setting = form
        .into_inner()
        .into_new(path.into_inner())
        .map_err(|errors| ServiceError::invalid("Invalid setting data", errors))?;

    let saved = settings_service.save_setting(setting).await?;
    Ok(HttpResponse::Ok().json(saved))
}
