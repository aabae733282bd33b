use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub admin_id: Option<Uuid>,
    pub email: Option<String>,
}

impl SessionResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            admin_id: None,
            email: None,
        }
    }

    pub fn admin(admin_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            admin_id: Some(admin_id),
            email: Some(email.into()),
        }
    }
}
