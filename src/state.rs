//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;
use crate::services::weather_service::{HttpWeatherProvider, WeatherProvider};
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitState,
    pub weather: Arc<dyn WeatherProvider>,
}

impl AppState {
    /// Estado con el proveedor de clima HTTP real
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::Internal(format!("No se pudo crear el cliente HTTP: {}", e)))?;

        let weather = Arc::new(HttpWeatherProvider::new(
            http_client,
            config.weather_geo_url.clone(),
            config.weather_api_url.clone(),
        ));

        Ok(Self::with_weather(pool, config, weather))
    }

    /// Estado con un proveedor de clima inyectado (tests)
    pub fn with_weather(
        pool: PgPool,
        config: EnvironmentConfig,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            jwt: JwtConfig::from(&config),
            rate_limit: RateLimitState::from_config(&config),
            pool,
            config,
            weather,
        }
    }
}
