use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn blog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blog", get(controller::list_posts).post(controller::create_post))
        .route(
            "/blog/{id}",
            get(controller::get_post)
                .put(controller::update_post)
                .delete(controller::delete_post),
        )
}
