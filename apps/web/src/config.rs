use anyhow::{Context, Result};

use crate::theme::packs::ThemePackName;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream OneLink API, without a trailing slash.
    pub api_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub default_theme_pack: ThemePackName,
    /// Where unauthenticated visitors of the dashboard are sent.
    pub login_url: String,
    pub session_cookie: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: require_env("ONELINK_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            port: optional_env("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            default_theme_pack: optional_env("DEFAULT_THEME_PACK", "tech")
                .parse::<ThemePackName>()
                .context("DEFAULT_THEME_PACK must be one of: tech, minimal, cards")?,
            login_url: optional_env("LOGIN_URL", "/login"),
            session_cookie: optional_env("SESSION_COOKIE", "session"),
            http_timeout_secs: optional_env("HTTP_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Configuration for router and client tests; no environment reads.
    pub fn for_tests(api_base_url: &str) -> Self {
        Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            default_theme_pack: ThemePackName::Tech,
            login_url: "/login".to_string(),
            session_cookie: "session".to_string(),
            http_timeout_secs: 5,
        }
    }
}
