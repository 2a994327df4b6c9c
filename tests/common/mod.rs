use axum_test::TestServer;
use law_office_backend::config::{init_db, init_memory_db, run_migrations, Config, DbPool};
use serde_json::{json, Value};
use tempfile::TempDir;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub db: DbPool,
    _dir: Option<TempDir>,
}

#[allow(dead_code)]
impl TestContext {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Fresh in-memory database per context, so tests never see each other's rows.
    pub async fn with_config(config: Config) -> Self {
        let db = init_memory_db()
            .await
            .expect("Failed to open in-memory database");

        Self::build(db, config, None).await
    }

    /// Database file in a temporary directory behind a several-connection pool,
    /// so racing requests really run on separate connections.
    pub async fn file_backed() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("law_office.db").display());

        let db = init_db(&url, 5)
            .await
            .expect("Failed to open file database");

        Self::build(db, test_config(), Some(dir)).await
    }

    async fn build(db: DbPool, config: Config, dir: Option<TempDir>) -> Self {
        run_migrations(&db).await.expect("Failed to run migrations");

        let app = law_office_backend::create_app(db.clone(), config)
            .expect("Failed to build app");
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            db,
            _dir: dir,
        }
    }

    pub async fn setup_admin(&self, username: &str, password: &str) {
        self.server
            .post("/api/admin/setup")
            .json(&json!({ "username": username, "password": password }))
            .await
            .assert_status_ok();
    }

    /// Requests a reset for `username` and returns the token from the echoed link.
    pub async fn request_reset_token(&self, username: &str) -> String {
        let response = self
            .server
            .post("/api/admin/forgot-password")
            .json(&json!({ "email": username }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        token_from_link(body["reset_link"].as_str().expect("reset_link missing"))
    }

    pub async fn login_status(&self, username: &str, password: &str) -> axum::http::StatusCode {
        self.server
            .post("/api/admin/login")
            .json(&json!({ "username": username, "password": password }))
            .await
            .status_code()
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.db)
            .await
            .expect("count query failed")
    }
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        reset_link_base: "http://localhost:3000/admin/reset-password".to_string(),
        demo_mode: true,
        allow_admin_reset: true,
        auth_rate_limit_burst: 1000,
        ..Config::default()
    }
}

#[allow(dead_code)]
pub fn token_from_link(link: &str) -> String {
    link.split("token=")
        .nth(1)
        .expect("link has no token")
        .to_string()
}

// Helper to generate test password
#[allow(dead_code)]
pub fn test_password() -> &'static str {
    "Hukuk2024!"
}

#[allow(dead_code)]
pub fn message_payload(subject: &str) -> Value {
    json!({
        "name": "Ayşe Yılmaz",
        "email": "ayse@example.com",
        "phone": "+90 555 123 45 67",
        "subject": subject,
        "legal_area": "family_law",
        "urgency": "high",
        "message": "Boşanma davası hakkında bilgi almak istiyorum."
    })
}

#[allow(dead_code)]
pub fn blog_payload(title_tr: &str, slug: &str) -> Value {
    json!({
        "title_tr": title_tr,
        "title_en": "Commercial Law Update",
        "title_de": "Neuigkeiten im Handelsrecht",
        "title_ru": "Новости коммерческого права",
        "content_tr": "Türk Ticaret Kanunu'nda yapılan son değişiklikler.",
        "content_en": "Recent amendments to the Turkish Commercial Code.",
        "content_de": "Die jüngsten Änderungen des türkischen Handelsgesetzbuchs.",
        "content_ru": "Последние изменения Торгового кодекса Турции.",
        "slug": slug
    })
}
