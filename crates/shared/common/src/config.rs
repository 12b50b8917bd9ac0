//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Wildcard origin value accepted in `allowed_origins`.
pub const ANY_ORIGIN: &str = "*";

/// Cross-origin resource sharing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API (`*` allows any)
    pub allowed_origins: Vec<String>,
    /// How long browsers may cache a preflight response, in seconds
    pub max_age_seconds: u64,
}

impl CorsConfig {
    /// Parse a comma separated origin list, ignoring blank entries.
    pub fn from_origin_list(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            allowed_origins,
            ..Self::default()
        }
    }

    /// True when every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![ANY_ORIGIN.to_string()],
            max_age_seconds: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_is_trimmed() {
        let cors = CorsConfig::from_origin_list(" http://localhost:5173 , ,http://example.com");
        assert_eq!(
            cors.allowed_origins,
            vec!["http://localhost:5173", "http://example.com"]
        );
        assert!(!cors.allows_any_origin());
    }

    #[test]
    fn wildcard_allows_any_origin() {
        assert!(CorsConfig::default().allows_any_origin());
        assert!(CorsConfig::from_origin_list("*").allows_any_origin());
        assert!(CorsConfig::from_origin_list("").allows_any_origin());
    }
}
