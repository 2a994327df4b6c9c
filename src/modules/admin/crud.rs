use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use super::interface::{AdminError, AdminIdentity, Result};
use super::model::AdminAccount;
use crate::config::DbPool;
use crate::services::hashing;

/// Well-formed Argon2 hash of nothing in particular. Unknown usernames are
/// verified against it so both login failures cost the same.
const TIMING_DUMMY_HASH: &str =
    "$argon2id$v=19$m=8192,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

pub struct AdminCrud {
    pool: DbPool,
}

impl AdminCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> std::result::Result<Option<AdminAccount>, sqlx::Error> {
        sqlx::query_as::<_, AdminAccount>("SELECT * FROM admin_users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_active_by_username(
        &self,
        username: &str,
    ) -> std::result::Result<Option<AdminAccount>, sqlx::Error> {
        sqlx::query_as::<_, AdminAccount>(
            "SELECT * FROM admin_users WHERE username = ? AND is_active = 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_active(
        &self,
        username: Option<&str>,
    ) -> std::result::Result<Vec<AdminAccount>, sqlx::Error> {
        match username {
            Some(username) => {
                sqlx::query_as::<_, AdminAccount>(
                    "SELECT * FROM admin_users WHERE is_active = 1 AND username = ?
                     ORDER BY created_at, rowid",
                )
                .bind(username)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AdminAccount>(
                    "SELECT * FROM admin_users WHERE is_active = 1 ORDER BY created_at, rowid",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Overwrites an active account's digest. Takes any executor so the reset
    /// flow can run it inside its own transaction. Returns rows touched.
    pub(crate) async fn write_password_hash<'e, E>(
        executor: E,
        account_id: &str,
        password_hash: &str,
    ) -> std::result::Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE admin_users SET password_hash = ? WHERE id = ? AND is_active = 1",
        )
        .bind(password_hash)
        .bind(account_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    async fn upgrade_legacy_hash(&self, account: &AdminAccount, password: &str) {
        let upgraded = match hashing::hash_password(password) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(admin_id = %account.id, "Could not rehash legacy digest: {}", e);
                return;
            }
        };

        match Self::write_password_hash(&self.pool, &account.id, &upgraded).await {
            Ok(_) => tracing::info!(admin_id = %account.id, "Upgraded legacy password digest"),
            Err(e) => tracing::warn!(admin_id = %account.id, "Could not store upgraded digest: {}", e),
        }
    }
}

#[async_trait]
impl AdminIdentity for AdminCrud {
    async fn is_setup_complete(&self) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn setup(&self, username: &str, password: &str) -> Result<AdminAccount> {
        if self.is_setup_complete().await? {
            return Err(AdminError::AlreadyExists);
        }

        let account = AdminAccount {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_hash: hashing::hash_password(password)?,
            is_active: true,
            created_at: Utc::now(),
        };

        // The existence check and the insert are one statement, so two racing
        // setups cannot both see an empty table.
        let result = sqlx::query(
            r#"
            INSERT INTO admin_users (id, username, password_hash, is_active, created_at)
            SELECT ?, ?, ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM admin_users)
            "#,
        )
        .bind(&account.id)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AdminError::AlreadyExists);
        }

        tracing::info!(admin_id = %account.id, username = %account.username, "Admin user created");
        Ok(account)
    }

    async fn login(&self, username: &str, password: &str) -> Result<String> {
        let Some(account) = self.find_active_by_username(username).await? else {
            let _ = hashing::verify_password(password, TIMING_DUMMY_HASH);
            tracing::warn!("Admin login rejected");
            return Err(AdminError::InvalidCredentials);
        };

        if !hashing::verify_password(password, &account.password_hash) {
            tracing::warn!("Admin login rejected");
            return Err(AdminError::InvalidCredentials);
        }

        if hashing::needs_rehash(&account.password_hash) {
            self.upgrade_legacy_hash(&account, password).await;
        }

        tracing::info!(admin_id = %account.id, "Admin logged in");
        Ok(account.id)
    }

    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        username: Option<&str>,
    ) -> Result<()> {
        let candidates = self.find_active(username).await?;

        // Digests are salted, so the match has to be found by verifying each
        // candidate. Oldest account wins when several share a password.
        let account = candidates
            .into_iter()
            .find(|account| hashing::verify_password(current_password, &account.password_hash))
            .ok_or(AdminError::InvalidCredentials)?;

        let new_hash = hashing::hash_password(new_password)?;
        if Self::write_password_hash(&self.pool, &account.id, &new_hash).await? == 0 {
            return Err(AdminError::InvalidCredentials);
        }

        tracing::info!(admin_id = %account.id, "Admin password changed");
        Ok(())
    }

    async fn set_password(&self, account_id: &str, new_password: &str) -> Result<()> {
        let new_hash = hashing::hash_password(new_password)?;
        if Self::write_password_hash(&self.pool, account_id, &new_hash).await? == 0 {
            return Err(AdminError::InvalidCredentials);
        }
        Ok(())
    }

    async fn reset_accounts(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM password_resets")
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM admin_users")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::warn!(deleted, "All admin users purged");
        Ok(deleted)
    }
}
