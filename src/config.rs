use anyhow::{Context, Result};

/// Default endpoint of the detectlanguage.com v0.2 API
pub const DEFAULT_DETECT_LANGUAGE_API_URL: &str = "https://ws.detectlanguage.com/0.2/detect";

#[derive(Debug, Clone)]
pub struct Config {
    // Language detection provider
    pub detect_language_api_key: String,
    pub detect_language_api_url: String,
    pub detect_language_timeout_secs: u64,

    // Database (None = in-process store)
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Language detection
            detect_language_api_key: std::env::var("DETECT_LANGUAGE_API_KEY")
                .context("DETECT_LANGUAGE_API_KEY not set")?,
            detect_language_api_url: std::env::var("DETECT_LANGUAGE_API_URL")
                .unwrap_or_else(|_| DEFAULT_DETECT_LANGUAGE_API_URL.to_string()),
            detect_language_timeout_secs: std::env::var("DETECT_LANGUAGE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            // Database
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
