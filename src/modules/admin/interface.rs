use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::AdminAccount;
use crate::services::hashing::HashingError;

// =============================================================================
// SERVICE TRAITS
// =============================================================================

pub type Result<T> = std::result::Result<T, AdminError>;

/// Admin account lifecycle: setup, credential checks and password rotation.
#[async_trait]
pub trait AdminIdentity: Send + Sync {
    async fn is_setup_complete(&self) -> Result<bool>;
    async fn setup(&self, username: &str, password: &str) -> Result<AdminAccount>;
    async fn login(&self, username: &str, password: &str) -> Result<String>;
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        username: Option<&str>,
    ) -> Result<()>;
    async fn set_password(&self, account_id: &str, new_password: &str) -> Result<()>;
    async fn reset_accounts(&self) -> Result<u64>;
}

/// Issues and consumes single-use, time-limited reset tokens.
#[async_trait]
pub trait PasswordReset: Send + Sync {
    async fn request_reset(&self, identifier: &str) -> Result<Option<ResetLink>>;
    async fn resolve_reset(&self, token: &str, new_password: &str) -> Result<()>;
    async fn purge_expired(&self) -> Result<u64>;
}

// =============================================================================
// SERVICE RESULT TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub struct ResetLink {
    pub token: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Admin user already exists")]
    AlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HashingError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdminError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::AlreadyExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidOrExpiredToken => StatusCode::BAD_REQUEST,
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
