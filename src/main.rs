use law_office_backend::config::{init_db, run_migrations, Config};
use law_office_backend::modules::admin::interface::PasswordReset;
use law_office_backend::modules::admin::reset::PasswordResetCrud;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "law_office_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let db = init_db(&config.database_url, config.db_max_connections).await?;
    run_migrations(&db).await?;
    tracing::info!(database_url = %config.database_url, "Connected to SQLite");

    let resets = PasswordResetCrud::new(db.clone(), config.reset_link_base.clone());
    resets.purge_expired().await?;

    if config.allow_admin_reset {
        tracing::warn!("ALLOW_ADMIN_RESET is on: DELETE /api/admin/reset is mounted");
    }

    let address = config.bind_address();
    let app = law_office_backend::create_app(db, config)?;

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
