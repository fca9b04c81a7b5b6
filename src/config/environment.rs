//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use thiserror::Error;

/// Errores al leer la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid number (got '{value}')")]
    InvalidNumber { key: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    pub run_migrations: bool,
    // URLs del proxy de clima
    pub weather_geo_url: String,
    pub weather_api_url: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = var_or(key, default);
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}

/// "a, b ,c" -> ["a", "b", "c"]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl EnvironmentConfig {
    /// Leer configuración desde el entorno. Solo JWT_SECRET es obligatorio.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            environment: var_or("ENVIRONMENT", "development"),
            port: parse_var("PORT", "3000")?,
            host: var_or("HOST", "0.0.0.0"),
            jwt_secret,
            jwt_expiration: parse_var("JWT_EXPIRATION", "3600")?,
            cors_origins: parse_origins(&var_or("CORS_ORIGINS", "*")),
            rate_limit_requests: parse_var("RATE_LIMIT_REQUESTS", "30")?,
            rate_limit_window: parse_var("RATE_LIMIT_WINDOW", "60")?,
            run_migrations: var_or("RUN_MIGRATIONS", "false").eq_ignore_ascii_case("true"),
            weather_geo_url: var_or("WEATHER_GEO_URL", "https://api.zippopotam.us/us"),
            weather_api_url: var_or("WEATHER_API_URL", "https://api.weather.gov"),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// CORS abierto cuando no hay orígenes concretos configurados
    pub fn cors_is_permissive(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("https://app.vextorgrid.com, http://localhost:5173 ,"),
            vec!["https://app.vextorgrid.com", "http://localhost:5173"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_server_url_and_cors_mode() {
        let config = EnvironmentConfig {
            environment: "production".to_string(),
            port: 8080,
            host: "127.0.0.1".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec!["*".to_string()],
            rate_limit_requests: 30,
            rate_limit_window: 60,
            run_migrations: false,
            weather_geo_url: "http://geo".to_string(),
            weather_api_url: "http://wx".to_string(),
        };

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert!(config.cors_is_permissive());
        assert!(!config.is_development());
    }
}
