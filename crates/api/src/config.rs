//! API configuration.

use std::env;

use common::CorsConfig;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Cross-origin settings for browser clients
    pub cors: CorsConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port: env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| CorsConfig::from_origin_list(&origins))
                .unwrap_or(defaults.cors),
        }
    }

    /// Socket address string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5012,
            cors: CorsConfig::default(),
        }
    }
}
