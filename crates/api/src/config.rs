/// Server configuration loaded from environment variables.
///
/// All fields except the MongoDB URI have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// MongoDB database name (default: `gwc`).
    pub mongodb_db: String,
    /// Session-token lifetimes.
    pub session: SessionConfig,
}

/// Lifetimes for the temp-token / session-token scheme.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Temp token lifetime in minutes (default: 10). Short because the token
    /// travels inside a deep link.
    pub temp_token_expiry_mins: i64,
    /// Session token lifetime in days (default: 7).
    pub session_token_expiry_days: i64,
}

/// Default temp token expiry in minutes.
const DEFAULT_TEMP_EXPIRY_MINS: i64 = 10;
/// Default session token expiry in days.
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default                 |
    /// |------------------------|----------|-------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`               |
    /// | `PORT`                 | no       | `3000`                  |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                    |
    /// | `MONGODB_URI`          | **yes**  | --                      |
    /// | `MONGODB_DB`           | no       | `gwc`                   |
    ///
    /// # Panics
    ///
    /// Panics if `MONGODB_URI` is not set or a numeric variable is malformed,
    /// which is the desired behaviour -- misconfiguration must fail fast at
    /// startup.
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

        let mongodb_uri =
            std::env::var("MONGODB_URI").expect("MONGODB_URI must be set in the environment");

        let mongodb_db = std::env::var("MONGODB_DB").unwrap_or_else(|_| "gwc".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            mongodb_uri,
            mongodb_db,
            session: SessionConfig::from_env(),
        }
    }
}

impl SessionConfig {
    /// Load token lifetimes from environment variables.
    ///
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `TEMP_TOKEN_EXPIRY_MINS`    | `10`    |
    /// | `SESSION_TOKEN_EXPIRY_DAYS` | `7`     |
    pub fn from_env() -> Self {
        let temp_token_expiry_mins: i64 = std::env::var("TEMP_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TEMP_EXPIRY_MINS.to_string())
            .parse()
            .expect("TEMP_TOKEN_EXPIRY_MINS must be a valid i64");

        let session_token_expiry_days: i64 = std::env::var("SESSION_TOKEN_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_DAYS.to_string())
            .parse()
            .expect("SESSION_TOKEN_EXPIRY_DAYS must be a valid i64");

        Self {
            temp_token_expiry_mins,
            session_token_expiry_days,
        }
    }

    /// Temp token lifetime in seconds.
    pub fn temp_token_ttl_secs(&self) -> i64 {
        self.temp_token_expiry_mins * 60
    }

    /// Session token lifetime in seconds.
    pub fn session_token_ttl_secs(&self) -> i64 {
        self.session_token_expiry_days * 86_400
    }
}
