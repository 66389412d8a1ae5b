// src/common/config.rs
//! Process configuration loaded once at startup
//!
//! Everything the service needs from the environment lives here; `main`
//! builds a `Config`, constructs the clients from it, and injects them
//! through `AppState`. No module reads the environment at call time.

use anyhow::Context;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub google_client_id: String,
    pub cors_origins: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shiftwork.db".to_string());

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "replace_with_strong_secret".to_string());

        // Audience checks are meaningless without a registered client id, so
        // this one is required rather than defaulted.
        let google_client_id = env::var("GOOGLE_CLIENT_ID")
            .context("GOOGLE_CLIENT_ID must be set to verify Google id tokens")?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        Ok(Self {
            database_url,
            jwt_secret,
            google_client_id,
            cors_origins,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_env_missing() {
        // GOOGLE_CLIENT_ID is the only required key
        std::env::set_var("GOOGLE_CLIENT_ID", "test-client-id");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("CORS_ORIGINS");
        std::env::remove_var("PORT");

        let config = Config::from_env().expect("config should load with defaults");
        assert_eq!(config.database_url, "sqlite://shiftwork.db");
        assert_eq!(config.port, 8000);
        assert_eq!(config.google_client_id, "test-client-id");
        assert!(config.cors_origins.contains("5173"));
    }
}
