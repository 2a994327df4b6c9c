use chrono::Utc;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{FromRow, Sqlite};

use super::defaults::default_settings;
use super::model::{SiteSettings, SITE_SETTINGS_ID};
use super::schema::SiteSettingsUpdate;
use crate::config::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SettingsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::Database(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

const INSERT_SETTINGS: &str = r#"
    INSERT INTO site_settings (
        id, logo_url,
        hero_title_tr, hero_title_en, hero_title_de, hero_title_ru,
        hero_subtitle_tr, hero_subtitle_en, hero_subtitle_de, hero_subtitle_ru,
        hero_description_tr, hero_description_en, hero_description_de, hero_description_ru,
        about_company_tr, about_company_en, about_company_de, about_company_ru,
        about_founder_tr, about_founder_en, about_founder_de, about_founder_ru,
        created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const ON_CONFLICT_REPLACE: &str = r#"
    ON CONFLICT(id) DO UPDATE SET
        logo_url = excluded.logo_url,
        hero_title_tr = excluded.hero_title_tr,
        hero_title_en = excluded.hero_title_en,
        hero_title_de = excluded.hero_title_de,
        hero_title_ru = excluded.hero_title_ru,
        hero_subtitle_tr = excluded.hero_subtitle_tr,
        hero_subtitle_en = excluded.hero_subtitle_en,
        hero_subtitle_de = excluded.hero_subtitle_de,
        hero_subtitle_ru = excluded.hero_subtitle_ru,
        hero_description_tr = excluded.hero_description_tr,
        hero_description_en = excluded.hero_description_en,
        hero_description_de = excluded.hero_description_de,
        hero_description_ru = excluded.hero_description_ru,
        about_company_tr = excluded.about_company_tr,
        about_company_en = excluded.about_company_en,
        about_company_de = excluded.about_company_de,
        about_company_ru = excluded.about_company_ru,
        about_founder_tr = excluded.about_founder_tr,
        about_founder_en = excluded.about_founder_en,
        about_founder_de = excluded.about_founder_de,
        about_founder_ru = excluded.about_founder_ru,
        updated_at = excluded.updated_at
    RETURNING *
"#;

/// Binds the id and every content column, in `INSERT_SETTINGS` order.
fn bind_content<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    s: &'q SiteSettingsUpdate,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    query
        .bind(SITE_SETTINGS_ID)
        .bind(&s.logo_url)
        .bind(&s.hero_title_tr)
        .bind(&s.hero_title_en)
        .bind(&s.hero_title_de)
        .bind(&s.hero_title_ru)
        .bind(&s.hero_subtitle_tr)
        .bind(&s.hero_subtitle_en)
        .bind(&s.hero_subtitle_de)
        .bind(&s.hero_subtitle_ru)
        .bind(&s.hero_description_tr)
        .bind(&s.hero_description_en)
        .bind(&s.hero_description_de)
        .bind(&s.hero_description_ru)
        .bind(&s.about_company_tr)
        .bind(&s.about_company_en)
        .bind(&s.about_company_de)
        .bind(&s.about_company_ru)
        .bind(&s.about_founder_tr)
        .bind(&s.about_founder_en)
        .bind(&s.about_founder_de)
        .bind(&s.about_founder_ru)
}

pub struct SettingsCrud {
    pool: DbPool,
}

impl SettingsCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Returns the settings row, seeding it with the default copy first if it
    /// does not exist yet. Concurrent first reads still leave a single row.
    pub async fn get_or_create_default(&self) -> Result<SiteSettings, SettingsError> {
        let defaults = default_settings();
        let now = Utc::now();
        let sql = format!("{INSERT_SETTINGS} ON CONFLICT(id) DO NOTHING");

        let inserted = bind_content(sqlx::query(&sql), &defaults)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if inserted > 0 {
            tracing::info!("Seeded default site settings");
        }

        let settings = sqlx::query_as::<_, SiteSettings>("SELECT * FROM site_settings WHERE id = ?")
            .bind(SITE_SETTINGS_ID)
            .fetch_one(&self.pool)
            .await?;

        Ok(settings)
    }

    /// Replaces every content field. `created_at` survives from the first write.
    pub async fn upsert(&self, update: SiteSettingsUpdate) -> Result<SiteSettings, SettingsError> {
        let now = Utc::now();
        let sql = format!("{INSERT_SETTINGS} {ON_CONFLICT_REPLACE}");

        let row = bind_content(sqlx::query(&sql), &update)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        let settings = SiteSettings::from_row(&row)?;

        tracing::info!("Site settings updated");
        Ok(settings)
    }
}
