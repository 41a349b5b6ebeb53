use crate::models::{ContactMessage, FieldError, User};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaseStudyQuery {
    /// Maximum number of case studies to return
    pub limit: Option<u32>,
    /// Only return case studies whose featured flag matches
    pub featured: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageQuery {
    /// Maximum number of messages to return
    pub limit: Option<u32>,
    /// Only return messages that have not been read
    pub unread: Option<bool>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

// Common response types
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

// Authentication responses
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

// Contact form responses
#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub data: ContactMessage,
}
