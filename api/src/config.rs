//! Application configuration

use anyhow::{Context, Result};

/// Origins the browser front-ends are served from during development
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Allowed CORS origins; `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),
        })
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        std::env::remove_var("PORT");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
        let config = AppConfig::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(parse_origins(" a , ,b,"), vec!["a", "b"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_wildcard_origin() {
        let config = AppConfig {
            cors_allowed_origins: parse_origins("*"),
            ..AppConfig::default()
        };
        assert!(config.allows_any_origin());
    }
}
