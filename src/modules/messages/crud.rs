use chrono::Utc;
use uuid::Uuid;

use super::model::ContactMessage;
use super::schema::ContactMessageCreate;
use crate::config::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MessageError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct MessageCrud {
    pool: DbPool,
}

impl MessageCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: ContactMessageCreate) -> Result<ContactMessage, MessageError> {
        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: req.phone.trim().to_string(),
            subject: req.subject.trim().to_string(),
            legal_area: req.legal_area,
            urgency: req.urgency,
            message: req.message,
            created_at: Utc::now(),
            is_read: false,
        };

        sqlx::query(
            r#"
            INSERT INTO contact_messages
                (id, name, email, phone, subject, legal_area, urgency, message, created_at, is_read)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.subject)
        .bind(message.legal_area)
        .bind(message.urgency)
        .bind(&message.message)
        .bind(message.created_at)
        .bind(message.is_read)
        .execute(&self.pool)
        .await?;

        tracing::info!(message_id = %message.id, urgency = message.urgency.as_str(), "Contact message received");
        Ok(message)
    }

    /// Newest first; rows with the same timestamp keep reverse insertion order.
    pub async fn list(&self) -> Result<Vec<ContactMessage>, MessageError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn mark_read(&self, id: &str) -> Result<(), MessageError> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MessageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), MessageError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MessageError::NotFound);
        }

        tracing::info!(message_id = %id, "Contact message deleted");
        Ok(())
    }
}
