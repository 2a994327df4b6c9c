use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Primary key of the only settings row.
pub const SITE_SETTINGS_ID: &str = "site";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SiteSettings {
    pub id: String,
    pub logo_url: String,
    pub hero_title_tr: String,
    pub hero_title_en: String,
    pub hero_title_de: String,
    pub hero_title_ru: String,
    pub hero_subtitle_tr: String,
    pub hero_subtitle_en: String,
    pub hero_subtitle_de: String,
    pub hero_subtitle_ru: String,
    pub hero_description_tr: String,
    pub hero_description_en: String,
    pub hero_description_de: String,
    pub hero_description_ru: String,
    pub about_company_tr: String,
    pub about_company_en: String,
    pub about_company_de: String,
    pub about_company_ru: String,
    pub about_founder_tr: String,
    pub about_founder_en: String,
    pub about_founder_de: String,
    pub about_founder_ru: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
