use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::model::BlogPost;
use super::schema::BlogPostCreate;
use super::slug::{generate_slug, is_valid_slug};
use crate::config::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Slug must contain only lowercase letters, digits and single dashes")]
    InvalidSlug,

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for BlogError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::SlugTaken,
            _ => Self::Database(e),
        }
    }
}

impl BlogError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::SlugTaken => StatusCode::CONFLICT,
            Self::InvalidSlug => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Supplied slug if present, otherwise one derived from the Turkish title
/// (English when the Turkish one has no ASCII-foldable characters).
fn resolve_slug(req: &BlogPostCreate) -> Result<String, BlogError> {
    let supplied = req.slug.trim();
    let slug = if supplied.is_empty() {
        let from_tr = generate_slug(&req.title_tr);
        if from_tr.is_empty() {
            generate_slug(&req.title_en)
        } else {
            from_tr
        }
    } else {
        supplied.to_string()
    };

    if !is_valid_slug(&slug) {
        return Err(BlogError::InvalidSlug);
    }
    Ok(slug)
}

/// Never returns a time at or before `previous`, even if the clock stalled or
/// stepped backwards.
fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + Duration::microseconds(1);
    if now > floor {
        now
    } else {
        floor
    }
}

pub struct BlogCrud {
    pool: DbPool,
}

impl BlogCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: BlogPostCreate) -> Result<BlogPost, BlogError> {
        let slug = resolve_slug(&req)?;
        let now = Utc::now();

        let post = BlogPost {
            id: Uuid::new_v4().to_string(),
            title_tr: req.title_tr,
            title_en: req.title_en,
            title_de: req.title_de,
            title_ru: req.title_ru,
            content_tr: req.content_tr,
            content_en: req.content_en,
            content_de: req.content_de,
            content_ru: req.content_ru,
            slug,
            published: req.published,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO blog_posts
                (id, title_tr, title_en, title_de, title_ru,
                 content_tr, content_en, content_de, content_ru,
                 slug, published, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&post.id)
        .bind(&post.title_tr)
        .bind(&post.title_en)
        .bind(&post.title_de)
        .bind(&post.title_ru)
        .bind(&post.content_tr)
        .bind(&post.content_en)
        .bind(&post.content_de)
        .bind(&post.content_ru)
        .bind(&post.slug)
        .bind(post.published)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(post_id = %post.id, slug = %post.slug, "Blog post created");
        Ok(post)
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<BlogPost>, BlogError> {
        let sql = if published_only {
            "SELECT * FROM blog_posts WHERE published = 1 ORDER BY created_at DESC, rowid DESC"
        } else {
            "SELECT * FROM blog_posts ORDER BY created_at DESC, rowid DESC"
        };

        let posts = sqlx::query_as::<_, BlogPost>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    /// Looks a post up by id, then by slug. An id match wins if a slug
    /// happens to look like someone else's id.
    pub async fn get(&self, id_or_slug: &str) -> Result<BlogPost, BlogError> {
        sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT * FROM blog_posts
            WHERE id = ?1 OR slug = ?1
            ORDER BY (id = ?1) DESC
            LIMIT 1
            "#,
        )
        .bind(id_or_slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(BlogError::NotFound)
    }

    pub async fn update(&self, id: &str, req: BlogPostCreate) -> Result<BlogPost, BlogError> {
        let slug = resolve_slug(&req)?;

        // Read-then-write: take the write lock up front. A deferred transaction
        // that has already read cannot wait for another writer and fails busy.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(BlogError::NotFound)?;

        let post = BlogPost {
            id: existing.id,
            title_tr: req.title_tr,
            title_en: req.title_en,
            title_de: req.title_de,
            title_ru: req.title_ru,
            content_tr: req.content_tr,
            content_en: req.content_en,
            content_de: req.content_de,
            content_ru: req.content_ru,
            slug,
            published: req.published,
            created_at: existing.created_at,
            updated_at: next_updated_at(existing.updated_at, Utc::now()),
        };

        sqlx::query(
            r#"
            UPDATE blog_posts SET
                title_tr = ?, title_en = ?, title_de = ?, title_ru = ?,
                content_tr = ?, content_en = ?, content_de = ?, content_ru = ?,
                slug = ?, published = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&post.title_tr)
        .bind(&post.title_en)
        .bind(&post.title_de)
        .bind(&post.title_ru)
        .bind(&post.content_tr)
        .bind(&post.content_en)
        .bind(&post.content_de)
        .bind(&post.content_ru)
        .bind(&post.slug)
        .bind(post.published)
        .bind(post.updated_at)
        .bind(&post.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(post_id = %post.id, slug = %post.slug, "Blog post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: &str) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound);
        }

        tracing::info!(post_id = %id, "Blog post deleted");
        Ok(())
    }
}
