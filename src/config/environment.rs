use std::env;

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_link_base: String,
    /// Echo the reset link in the forgot-password response instead of mailing it.
    pub demo_mode: bool,
    /// Mounts `DELETE /api/admin/reset`. Never enable in production.
    pub allow_admin_reset: bool,
    pub auth_rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://law_office.db".to_string(),
            db_max_connections: 5,
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            reset_link_base: "http://localhost:3000/admin/reset-password".to_string(),
            demo_mode: true,
            allow_admin_reset: false,
            auth_rate_limit_burst: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?;
        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = parse_var("PORT", defaults.port)?;

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.cors_origins);

        let reset_link_base = env::var("RESET_LINK_BASE").unwrap_or(defaults.reset_link_base);
        let demo_mode = parse_flag("DEMO_MODE", defaults.demo_mode)?;
        let allow_admin_reset = parse_flag("ALLOW_ADMIN_RESET", defaults.allow_admin_reset)?;

        let auth_rate_limit_burst = parse_var("AUTH_RATE_LIMIT_BURST", defaults.auth_rate_limit_burst)?;
        if auth_rate_limit_burst == 0 {
            return Err("AUTH_RATE_LIMIT_BURST must be greater than zero".to_string());
        }

        Ok(Self {
            database_url,
            db_max_connections,
            host,
            port,
            cors_origins,
            reset_link_base,
            demo_mode,
            allow_admin_reset,
            auth_rate_limit_burst,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_is_permissive(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &str, default: bool) -> Result<bool, String> {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| format!("{} must be true or false, got {}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
