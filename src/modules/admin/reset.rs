use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

use super::crud::AdminCrud;
use super::interface::{AdminError, PasswordReset, ResetLink, Result};
use super::model::PasswordResetToken;
use crate::config::DbPool;
use crate::services::hashing;

/// How long an issued token stays consumable.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

const TOKEN_BYTES: usize = 32;

pub struct PasswordResetCrud {
    pool: DbPool,
    reset_link_base: String,
}

impl PasswordResetCrud {
    pub fn new(pool: DbPool, reset_link_base: impl Into<String>) -> Self {
        Self {
            pool,
            reset_link_base: reset_link_base.into(),
        }
    }

    pub async fn find_by_token(&self, token: &str) -> std::result::Result<Option<PasswordResetToken>, sqlx::Error> {
        sqlx::query_as::<_, PasswordResetToken>("SELECT * FROM password_resets WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
    }

    /// True while `token` exists, is unused and has not expired.
    pub async fn is_token_live(&self, token: &str) -> std::result::Result<bool, sqlx::Error> {
        let now = Utc::now();
        Ok(self
            .find_by_token(token)
            .await?
            .is_some_and(|t| !t.used && !t.is_expired_at(now)))
    }

    /// Consumes `token` as if the current time were `now`.
    ///
    /// Marking the token used and rewriting the digest share one transaction;
    /// any early return drops it, which rolls both back.
    pub async fn resolve_reset_at(
        &self,
        token: &str,
        new_password: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let new_hash = hashing::hash_password(new_password)?;

        let mut tx = self.pool.begin().await?;

        // Claim first: the conditional update takes the write lock, so a
        // concurrent resolver of the same token finds it already used.
        let claimed = sqlx::query_as::<_, PasswordResetToken>(
            r#"
            UPDATE password_resets SET used = 1
            WHERE token = ? AND used = 0
            RETURNING id, admin_id, token, expires_at, used, created_at
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(claimed) = claimed else {
            tracing::warn!("Password reset rejected: unknown or used token");
            return Err(AdminError::InvalidOrExpiredToken);
        };

        if claimed.is_expired_at(now) {
            tracing::warn!(reset_id = claimed.id, "Password reset rejected: token expired");
            return Err(AdminError::InvalidOrExpiredToken);
        }

        if AdminCrud::write_password_hash(&mut *tx, &claimed.admin_id, &new_hash).await? == 0 {
            tracing::warn!(reset_id = claimed.id, "Password reset rejected: account inactive");
            return Err(AdminError::InvalidOrExpiredToken);
        }

        tx.commit().await?;

        tracing::info!(admin_id = %claimed.admin_id, reset_id = claimed.id, "Password reset completed");
        Ok(())
    }

    fn build_link(&self, token: &str) -> String {
        let separator = if self.reset_link_base.contains('?') { '&' } else { '?' };
        format!("{}{}token={}", self.reset_link_base, separator, token)
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[async_trait]
impl PasswordReset for PasswordResetCrud {
    async fn request_reset(&self, identifier: &str) -> Result<Option<ResetLink>> {
        let admins = AdminCrud::new(self.pool.clone());
        let Some(account) = admins.find_active_by_username(identifier.trim()).await? else {
            tracing::warn!("Password reset requested for unknown identifier");
            return Ok(None);
        };

        let now = Utc::now();
        let token = generate_token();
        let expires_at = now + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

        sqlx::query(
            r#"
            INSERT INTO password_resets (admin_id, token, expires_at, used, created_at)
            VALUES (?, ?, ?, 0, ?)
            "#,
        )
        .bind(&account.id)
        .bind(&token)
        .bind(expires_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::info!(admin_id = %account.id, %expires_at, "Password reset token issued");

        Ok(Some(ResetLink {
            url: self.build_link(&token),
            token,
            expires_at,
        }))
    }

    async fn resolve_reset(&self, token: &str, new_password: &str) -> Result<()> {
        self.resolve_reset_at(token, new_password, Utc::now()).await
    }

    async fn purge_expired(&self) -> Result<u64> {
        // Used rows inside their window stay as the record of consumption.
        let deleted = sqlx::query("DELETE FROM password_resets WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!(deleted, "Purged expired password reset tokens");
        }
        Ok(deleted)
    }
}
