use crate::auth::{extract_session_id, SessionStore};
use crate::models::{ServiceError, SessionData};

pub async fn authenticate_request(
    req: &actix_web::HttpRequest,
    sessions: &SessionStore,
) -> Result<SessionData, ServiceError> {
    let sid = extract_session_id(req)
        .ok_or_else(|| ServiceError::AuthenticationError("Not authenticated".to_string()))?;

    sessions
        .load(&sid)
        .await?
        .ok_or_else(|| ServiceError::AuthenticationError("Session expired or invalid".to_string()))
}

/// Gate for every `/api/admin` handler.
pub async fn require_admin(
    req: &actix_web::HttpRequest,
    sessions: &SessionStore,
) -> Result<SessionData, ServiceError> {
    let session = authenticate_request(req, sessions).await?;
    if !session.is_admin {
        return Err(ServiceError::Forbidden("Admin access required".to_string()));
    }
    Ok(session)
}
