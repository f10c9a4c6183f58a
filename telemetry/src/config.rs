//! Telemetry service configuration

use anyhow::{Context, Result};

/// Telemetry service configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Allowed CORS origins; `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl TelemetryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("Invalid PORT")?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".to_string())
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        std::env::remove_var("PORT");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
        let config = TelemetryConfig::from_env().unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.cors_allowed_origins.len(), 2);
    }

    #[test]
    fn test_bind_addr() {
        let config = TelemetryConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            cors_allowed_origins: Vec::new(),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
