//! Proxy de clima por código postal
//!
//! Tres saltos: zippopotam.us (zip -> lat/lon), api.weather.gov/points
//! (lat/lon -> URL de pronóstico y ciudad) y el pronóstico en sí, del que
//! se toma el primer periodo.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::dto::weather_dto::{WeatherCondition, WeatherResponse};
use crate::utils::errors::{bad_request_error, AppError, AppResult};

const USER_AGENT: &str = "VextorGrid/1.0 (fleet-weather)";

/// Fuente de clima; los handlers dependen del trait, no del cliente HTTP
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, zip_code: &str) -> AppResult<WeatherResponse>;
}

#[derive(Debug, Deserialize)]
struct ZipLookup {
    places: Vec<ZipPlace>,
}

#[derive(Debug, Deserialize)]
struct ZipPlace {
    latitude: String,
    longitude: String,
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsProperties {
    forecast: String,
    relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
struct RelativeLocation {
    properties: CityProperties,
}

#[derive(Debug, Deserialize)]
struct CityProperties {
    city: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPeriod {
    temperature: f64,
    short_forecast: String,
}

/// Clasifica el texto corto del pronóstico; el primer grupo que coincide gana
pub fn map_weather_condition(short_forecast: &str) -> WeatherCondition {
    let lower = short_forecast.to_lowercase();

    if lower.contains("rain") || lower.contains("shower") {
        WeatherCondition::Rain
    } else if lower.contains("snow") || lower.contains("flurr") {
        WeatherCondition::Snow
    } else if lower.contains("cloud") {
        WeatherCondition::Cloudy
    } else if lower.contains("wind") {
        WeatherCondition::Wind
    } else {
        WeatherCondition::Clear
    }
}

pub struct HttpWeatherProvider {
    client: reqwest::Client,
    geo_base_url: String,
    weather_base_url: String,
}

impl HttpWeatherProvider {
    pub fn new(client: reqwest::Client, geo_base_url: String, weather_base_url: String) -> Self {
        Self {
            client,
            geo_base_url: geo_base_url.trim_end_matches('/').to_string(),
            weather_base_url: weather_base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str, step: &str) -> AppResult<T> {
        info!("🌐 Weather request ({}): {}", step, url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/geo+json, application/json")
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("{} request failed: {}", step, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("❌ {} failed with status {}", step, status);
            return Err(AppError::ExternalApi(format!("Failed to fetch {} (upstream status {})", step, status.as_u16())));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Failed to parse {} response: {}", step, e)))
    }

    async fn coordinates_for_zip(&self, zip_code: &str) -> AppResult<(String, String)> {
        let url = format!("{}/{}", self.geo_base_url, urlencoding::encode(zip_code));

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("zip lookup failed: {}", e)))?;

        if !response.status().is_success() {
            warn!("⚠️ Zip lookup rejected {} with status {}", zip_code, response.status());
            return Err(bad_request_error("Invalid zip code"));
        }

        let lookup: ZipLookup = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Failed to parse zip lookup: {}", e)))?;

        lookup
            .places
            .into_iter()
            .next()
            .map(|place| (place.latitude, place.longitude))
            .ok_or_else(|| bad_request_error("Invalid zip code"))
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn current_weather(&self, zip_code: &str) -> AppResult<WeatherResponse> {
        let (lat, lon) = self.coordinates_for_zip(zip_code).await?;

        let points_url = format!("{}/points/{},{}", self.weather_base_url, lat, lon);
        let points: PointsResponse = self.get_json(&points_url, "location data").await?;

        let forecast: ForecastResponse = self
            .get_json(&points.properties.forecast, "weather data")
            .await?;

        let period = forecast
            .properties
            .periods
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalApi("Forecast has no periods".to_string()))?;

        let weather = WeatherResponse {
            temp: period.temperature,
            condition: map_weather_condition(&period.short_forecast),
            location: points.properties.relative_location.properties.city,
        };

        info!("🌤️ Weather for {}: {}° {:?}", weather.location, weather.temp, weather.condition);
        Ok(weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_weather_condition_precedence() {
        assert_eq!(map_weather_condition("Chance Rain Showers"), WeatherCondition::Rain);
        assert_eq!(map_weather_condition("Rain And Snow"), WeatherCondition::Rain);
        assert_eq!(map_weather_condition("Snow Flurries"), WeatherCondition::Snow);
        assert_eq!(map_weather_condition("Mostly Cloudy then Windy"), WeatherCondition::Cloudy);
        assert_eq!(map_weather_condition("Breezy and Windy"), WeatherCondition::Wind);
        assert_eq!(map_weather_condition("Mostly Sunny"), WeatherCondition::Clear);
        assert_eq!(map_weather_condition("Patchy Fog"), WeatherCondition::Clear);
    }

    #[test]
    fn test_forecast_payload_parses() {
        let raw = r#"{"properties":{"periods":[{"number":1,"temperature":71,"shortForecast":"Partly Cloudy"}]}}"#;
        let parsed: ForecastResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.properties.periods[0].temperature, 71.0);

        let raw = r#"{"properties":{"forecast":"https://api.weather.gov/gridpoints/EWX/156,91/forecast","relativeLocation":{"properties":{"city":"Austin","state":"TX"}}}}"#;
        let parsed: PointsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.properties.relative_location.properties.city, "Austin");
    }
}
