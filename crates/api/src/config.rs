/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the portal locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://myLearn.db`).
    pub database_url: String,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: String,
    /// Directory uploaded news images are written to (default: `static/img`).
    pub upload_dir: String,
    /// Prefix stored in `news.image_path` for uploaded images
    /// (default: `static/img`).
    pub upload_url_prefix: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `5000`                |
    /// | `DATABASE_URL`         | `sqlite://myLearn.db` |
    /// | `STATIC_DIR`           | `static`              |
    /// | `UPLOAD_DIR`           | `static/img`          |
    /// | `UPLOAD_URL_PREFIX`    | `static/img`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://myLearn.db".into());

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/img".into());
        let upload_url_prefix =
            std::env::var("UPLOAD_URL_PREFIX").unwrap_or_else(|_| "static/img".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "10485760".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            database_url,
            static_dir,
            upload_dir,
            upload_url_prefix,
            request_timeout_secs,
            max_upload_bytes,
        }
    }
}
