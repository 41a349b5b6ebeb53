use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FieldError, Validator};

/// Database entity representing a message sent through the contact form
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn into_new(self) -> Result<NewContactMessage, Vec<FieldError>> {
        let mut v = Validator::new();

        let new = NewContactMessage {
            name: v.required_text("name", self.name, "Name is required"),
            email: v.required_text("email", self.email, "Email is required"),
            subject: v.required_text("subject", self.subject, "Subject is required"),
            message: v.required_text("message", self.message, "Message is required"),
        };

        v.finish(new)
    }
}
