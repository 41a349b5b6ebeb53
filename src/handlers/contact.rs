use actix_web::{web, HttpResponse, Result};

use crate::models::{ContactForm, ContactResponse, ServiceError};
use crate::services::ContactService;

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Message stored", body = ContactResponse),
        (status = 400, description = "Invalid form data", body = ErrorResponse),
        (status = 500, description = "Message could not be stored", body = ErrorResponse)
    ),
    security()
)]
pub async fn submit_contact(
    contact_service: web::Data<ContactService>,
    form: web::Json<ContactForm>,
) -> Result<HttpResponse, ServiceError> {
    let message = form
        .into_inner()
        .into_new()
        .map_err(|errors| ServiceError::invalid("Invalid form data", errors))?;

    let (saved, email_sent) = contact_service.submit(message).await?;

    let message = if email_sent {
        "Your message has been sent!"
    } else {
        "Your message was received but there was an issue sending the email notification."
    };

    Ok(HttpResponse::Created().json(ContactResponse {
        success: true,
        message: message.to_string(),
        data: saved,
    }))
}
