pub mod config;
pub mod modules;
pub mod services;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use config::{Config, DbPool};
use modules::admin::admin_routes;
use modules::blog::blog_routes;
use modules::messages::message_routes;
use modules::metrics::metrics_routes;
use modules::settings::settings_routes;
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::security::security_headers;

pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub metrics: Arc<MetricsRegistry>,
}

pub fn create_app(db: DbPool, config: Config) -> Result<Router, prometheus::Error> {
    let metrics = MetricsRegistry::new()?;

    let cors = cors_layer(&config);
    let admin = admin_routes(config.allow_admin_reset, config.auth_rate_limit_burst);

    let state = Arc::new(AppState {
        db,
        config,
        metrics: metrics.clone(),
    });

    let content = Router::new()
        .merge(message_routes())
        .merge(blog_routes())
        .merge(settings_routes());

    let app = Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/health", get(health_check))
        .nest("/api", content)
        .nest("/api/admin", admin)
        .merge(metrics_routes())
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1MB max body
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_is_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hançer Law Office API is running",
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();

    let (status, code, database) = if database_ok {
        ("ok", StatusCode::OK, "connected")
    } else {
        tracing::error!("Health check could not reach the database");
        ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
