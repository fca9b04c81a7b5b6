use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_zip_code;

#[derive(Debug, Deserialize, Validate)]
pub struct WeatherRequest {
    #[serde(rename = "zipCode", alias = "zip_code")]
    #[validate(custom = "validate_zip_code")]
    pub zip_code: Option<String>,
}

/// Condición simplificada que muestra el HUD
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Rain,
    Snow,
    Cloudy,
    Wind,
    Clear,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherResponse {
    pub temp: f64,
    pub condition: WeatherCondition,
    pub location: String,
}
