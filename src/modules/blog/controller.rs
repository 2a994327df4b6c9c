use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::crud::{BlogCrud, BlogError};
use super::model::BlogPost;
use super::schema::{BlogListQuery, BlogPostCreate};
use crate::modules::shared::{
    error_response, validation_error, ApiError, AppJson, AppQuery, MessageResponse,
};
use crate::AppState;

fn blog_error(e: BlogError) -> ApiError {
    error_response(e.status_code(), &e)
}

// =============================================================================
// POST /blog
// =============================================================================

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BlogPostCreate>,
) -> Result<Json<BlogPost>, ApiError> {
    req.validate().map_err(validation_error)?;

    let crud = BlogCrud::new(state.db.clone());
    let post = crud.create(req).await.map_err(blog_error)?;

    Ok(Json(post))
}

// =============================================================================
// GET /blog?published_only=true
// =============================================================================

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<BlogListQuery>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let crud = BlogCrud::new(state.db.clone());
    let posts = crud.list(query.published_only).await.map_err(blog_error)?;

    Ok(Json(posts))
}

// =============================================================================
// GET /blog/{id} - id or slug
// =============================================================================

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let crud = BlogCrud::new(state.db.clone());
    let post = crud.get(&id).await.map_err(blog_error)?;

    Ok(Json(post))
}

// =============================================================================
// PUT /blog/{id}
// =============================================================================

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(req): AppJson<BlogPostCreate>,
) -> Result<Json<BlogPost>, ApiError> {
    req.validate().map_err(validation_error)?;

    let crud = BlogCrud::new(state.db.clone());
    let post = crud.update(&id, req).await.map_err(blog_error)?;

    Ok(Json(post))
}

// =============================================================================
// DELETE /blog/{id}
// =============================================================================

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let crud = BlogCrud::new(state.db.clone());
    crud.delete(&id).await.map_err(blog_error)?;

    Ok(MessageResponse::new("Blog post deleted successfully"))
}
