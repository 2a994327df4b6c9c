use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// SETUP
// =============================================================================

#[derive(Debug, Serialize)]
pub struct CheckSetupResponse {
    pub has_admin: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetupRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct ResetAdminsResponse {
    pub message: &'static str,
    pub deleted: u64,
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub admin_id: String,
}

// =============================================================================
// CHANGE PASSWORD
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
    /// Narrows the lookup to one account when several admins exist.
    #[serde(default)]
    pub username: Option<String>,
}

// =============================================================================
// PASSWORD RESET
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[serde(alias = "username")]
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_link: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordQuery {
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}
