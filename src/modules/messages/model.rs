use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::schema::{LegalArea, Urgency};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub legal_area: LegalArea,
    pub urgency: Urgency,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}
