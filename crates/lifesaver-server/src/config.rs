//! Environment-backed configuration, read once at startup.

use std::env;
use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store file.
    pub data_dir: PathBuf,
    /// Database name; the store file is `<data_dir>/<db_name>.db`.
    pub db_name: String,
    /// Comma-separated allowed CORS origins, `*` for any.
    pub cors_origins: String,
    /// Provider credential for the chat relay. Its absence is only an
    /// error once `/chat` is called.
    pub llm_api_key: Option<String>,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "lifesaver".into()),
            cors_origins: env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            llm_api_key: env::var("LLM_API_KEY").ok(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Path of the store file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.db_name))
    }
}
