use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::services::rate_limit::{create_rate_limiter, RateLimitLayer};
use crate::AppState;

pub fn admin_routes(allow_reset: bool, auth_rate_limit_burst: u32) -> Router<Arc<AppState>> {
    let rate_limited = Router::new()
        .route("/login", post(controller::login))
        .route("/forgot-password", post(controller::forgot_password))
        .route_layer(RateLimitLayer::new(create_rate_limiter(auth_rate_limit_burst)));

    let router = Router::new()
        .route("/check-setup", get(controller::check_setup))
        .route("/setup", post(controller::setup))
        .route("/change-password", post(controller::change_password))
        .route("/reset-password", post(controller::reset_password))
        .merge(rate_limited);

    if allow_reset {
        router.route("/reset", delete(controller::reset_admins))
    } else {
        router
    }
}
