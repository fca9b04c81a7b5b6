//! Services module
//!
//! Lógica de negocio: el scorer de readiness, las tendencias de eficiencia,
//! las derivaciones al escribir y las integraciones externas (clima).

pub mod efficiency_trend;
pub mod fleet_readiness_service;
pub mod fuel_math;
pub mod leaderboard;
pub mod mission_economics;
pub mod readiness_scorer;
pub mod weather_service;

pub use fleet_readiness_service::FleetReadinessService;
pub use weather_service::{HttpWeatherProvider, WeatherProvider};
