use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::auth::{extract_session_id, SessionStore};
use crate::middleware::auth::authenticate_request;
use crate::models::{ApiResponse, LoginForm, LoginResponse, ServiceError};
use crate::services::UserService;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful - session cookie set", body = LoginResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    security()
)]
pub async fn login_api(
    user_service: web::Data<UserService>,
    sessions: web::Data<SessionStore>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let user = user_service
        .authenticate(&form.username, &form.password)
        .await?;

    let sid = sessions.create(&user).await?;
    tracing::info!(username = %user.username, "User logged in");

    Ok(HttpResponse::Ok()
        .cookie(sessions.session_cookie(sid))
        .json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user,
        }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Logout successful", body = ApiResponse)
    ),
    security()
)]
pub async fn logout_api(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
) -> Result<HttpResponse, ServiceError> {
    if let Some(sid) = extract_session_id(&req) {
        sessions.destroy(&sid).await?;
    }

    Ok(HttpResponse::Ok()
        .cookie(sessions.removal_cookie())
        .json(ApiResponse {
            success: true,
            message: "Logout successful".to_string(),
        }))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Currently signed-in user", body = User),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn current_user_api(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ServiceError> {
    let session = authenticate_request(&req, &sessions).await?;

    let user = user_service
        .get_user(session.user_id)
        .await?
        .ok_or_else(|| ServiceError::AuthenticationError("Not authenticated".to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}
