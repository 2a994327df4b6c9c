use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogPost {
    pub id: String,
    pub title_tr: String,
    pub title_en: String,
    pub title_de: String,
    pub title_ru: String,
    pub content_tr: String,
    pub content_en: String,
    pub content_de: String,
    pub content_ru: String,
    pub slug: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
