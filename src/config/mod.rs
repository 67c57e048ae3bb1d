/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub feed_url: String,
    pub bind_addr: String,
    pub http_timeout_seconds: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let feed_url = env::var("FEED_URL").unwrap_or_else(|_| {
            "https://earthquake.usgs.gov/fdsnws/event/1/query".to_string()
        });

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let http_timeout_seconds = env_u64("HTTP_TIMEOUT_SECONDS", 30);

        Ok(Self {
            feed_url,
            bind_addr,
            http_timeout_seconds,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
