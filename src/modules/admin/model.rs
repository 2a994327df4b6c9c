use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct AdminAccount {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Single-use reset grant. `id` is a sequence number, separate from the
/// account id space.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetToken {
    pub id: i64,
    pub admin_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Expiry is derived, never stored: a token is still valid at exactly
    /// `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
