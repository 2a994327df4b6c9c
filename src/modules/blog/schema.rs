use serde::Deserialize;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Body for both creating and replacing a post. Every locale is required;
/// a blank slug is derived from the Turkish title.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogPostCreate {
    #[validate(length(min = 1, max = 300, message = "Turkish title is required"))]
    pub title_tr: String,
    #[validate(length(min = 1, max = 300, message = "English title is required"))]
    pub title_en: String,
    #[validate(length(min = 1, max = 300, message = "German title is required"))]
    pub title_de: String,
    #[validate(length(min = 1, max = 300, message = "Russian title is required"))]
    pub title_ru: String,
    #[validate(length(min = 1, message = "Turkish content is required"))]
    pub content_tr: String,
    #[validate(length(min = 1, message = "English content is required"))]
    pub content_en: String,
    #[validate(length(min = 1, message = "German content is required"))]
    pub content_de: String,
    #[validate(length(min = 1, message = "Russian content is required"))]
    pub content_ru: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default = "default_true")]
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    #[serde(default = "default_true")]
    pub published_only: bool,
}
