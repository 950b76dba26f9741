// src/config/mod.rs
// All values come from the environment (.env supported), with sane defaults.
// Upstream API keys are intentionally NOT part of this struct: the clients
// read them from the process environment when they are constructed.

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EmberlogConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Upstream Generative APIs
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub artwork_base_url: String,
    pub upstream_timeout_secs: u64,

    // ── Daily Prompt Rotation
    pub prompt_fetch_delay_ms: u64,
    pub proxy_base_url: String,
    pub prompt_store_path: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing inline comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl EmberlogConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            host: env_var_or("EMBERLOG_HOST", "0.0.0.0".to_string()),
            port: env_var_or("EMBERLOG_PORT", 8787),
            gemini_base_url: env_var_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com".to_string(),
            ),
            gemini_model: env_var_or("GEMINI_MODEL", "gemini-pro".to_string()),
            artwork_base_url: env_var_or(
                "STARRY_BASE_URL",
                "https://api.starryai.com".to_string(),
            ),
            upstream_timeout_secs: env_var_or("EMBERLOG_UPSTREAM_TIMEOUT", 30),
            prompt_fetch_delay_ms: env_var_or("EMBERLOG_PROMPT_FETCH_DELAY_MS", 400),
            proxy_base_url: env_var_or(
                "EMBERLOG_PROXY_BASE_URL",
                "http://localhost:8787".to_string(),
            ),
            prompt_store_path: env_var_or("EMBERLOG_PROMPT_STORE_PATH", String::new()),
            log_level: env_var_or("EMBERLOG_LOG_LEVEL", "info".to_string()),
        }
    }

    // --- Convenience Methods for Common Operations ---

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full generateContent URL for the configured Gemini model
    pub fn gemini_generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.gemini_base_url.trim_end_matches('/'),
            self.gemini_model
        )
    }

    /// Full generation URL for the artwork API
    pub fn artwork_generation_url(&self) -> String {
        format!(
            "{}/api/v1/generation",
            self.artwork_base_url.trim_end_matches('/')
        )
    }

    /// Timeout applied to each upstream request
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Delay between sequential daily-prompt population fetches
    pub fn prompt_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_fetch_delay_ms)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<EmberlogConfig> = Lazy::new(EmberlogConfig::from_env);
