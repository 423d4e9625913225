use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Network and timeout settings have development defaults; secrets
/// (`DATABASE_URL`, `JWT_SECRET`) have none and must be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Minimum password length accepted at registration (default: `8`).
    pub min_password_len: usize,
    /// Whether creating an obra finalizada clears its stored percentage
    /// (default: `true`). Deployments disagree on this rule, so it is
    /// configurable rather than hard-coded.
    pub finalizada_limpia_porcentaje: bool,
    /// Whether startup applies pending migrations itself (default:
    /// `false`). When false, startup only verifies the schema is
    /// current and refuses to serve otherwise.
    pub migrate_on_start: bool,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                    |
    /// |--------------------------------|----------------------------|
    /// | `HOST`                         | `0.0.0.0`                  |
    /// | `PORT`                         | `3000`                     |
    /// | `CORS_ORIGINS`                 | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`         | `30`                       |
    /// | `MIN_PASSWORD_LEN`             | `8`                        |
    /// | `FINALIZADA_LIMPIA_PORCENTAJE` | `true`                     |
    /// | `MIGRATE_ON_START`             | `false`                    |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values, and transitively if `JWT_SECRET`
    /// is missing -- misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let min_password_len: usize = std::env::var("MIN_PASSWORD_LEN")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("MIN_PASSWORD_LEN must be a valid usize");

        let finalizada_limpia_porcentaje: bool = std::env::var("FINALIZADA_LIMPIA_PORCENTAJE")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("FINALIZADA_LIMPIA_PORCENTAJE must be true or false");

        let migrate_on_start: bool = std::env::var("MIGRATE_ON_START")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("MIGRATE_ON_START must be true or false");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            min_password_len,
            finalizada_limpia_porcentaje,
            migrate_on_start,
            jwt,
        }
    }
}
