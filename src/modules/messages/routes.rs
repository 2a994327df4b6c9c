use axum::{
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn message_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/messages",
            get(controller::list_messages).post(controller::create_message),
        )
        .route("/messages/{id}", delete(controller::delete_message))
        .route("/messages/{id}/read", put(controller::mark_message_read))
}
