use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://resumes.db?mode=rwc";

/// Service configuration loaded from environment variables.
/// Every variable has a default, so a bare `recruiter` invocation works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing file of the candidate store.
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_mb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_mb: env_or("MAX_UPLOAD_MB", "10")
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_mb: 10,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
