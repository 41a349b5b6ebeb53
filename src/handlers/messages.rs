use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::auth::SessionStore;
use crate::middleware::auth::require_admin;
use crate::models::{MessageQuery, ServiceError, SuccessResponse};
use crate::services::ContactService;

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    params(MessageQuery),
    responses(
        (status = 200, description = "Contact messages, newest first", body = [ContactMessage]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_messages(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    contact_service: web::Data<ContactService>,
    query: web::Query<MessageQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let messages = contact_service
        .get_contact_messages(query.limit, query.unread.unwrap_or(false))
        .await?;

    Ok(HttpResponse::Ok().json(messages))
}

#[utoipa::path(
    get,
    path = "/api/admin/messages/{id}",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Contact message", body = ContactMessage),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse)
    )
)]
pub async fn get_message(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    contact_service: web::Data<ContactService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let message = contact_service
        .get_contact_message(path.into_inner())
        .await?
        .ok_or_else(|| ServiceError::NotFound("Message not found".to_string()))?;

    Ok(HttpResponse::Ok().json(message))
}

#[utoipa::path(
    put,
    path = "/api/admin/messages/{id}/read",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read", body = SuccessResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse)
    )
)]
pub async fn mark_message_read(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    contact_service: web::Data<ContactService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    if contact_service.mark_message_as_read(path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
    } else {
        Err(ServiceError::NotFound("Message not found".to_string()))
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse)
    )
)]
pub async fn delete_message(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    contact_service: web::Data<ContactService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    if contact_service.delete_contact_message(path.into_inner()).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ServiceError::NotFound("Message not found".to_string()))
    }
}
