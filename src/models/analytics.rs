//! Modelos de Analytics
//!
//! Este módulo contiene los valores derivados que se calculan en cada
//! refresco y nunca se persisten: estado de aceite, puntuación de salud,
//! tendencia de eficiencia y resúmenes financieros.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del cambio de aceite de un vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OilStatus {
    Good,
    Warning,
    Overdue,
}

/// Etiqueta de salud derivada de la puntuación 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    CombatReady,
    MaintenanceRequired,
    Grounded,
}

impl HealthStatus {
    /// Texto que muestra el panel de flota
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::CombatReady => "COMBAT READY",
            HealthStatus::MaintenanceRequired => "MAINTENANCE REQUIRED",
            HealthStatus::Grounded => "GROUNDED",
        }
    }
}

/// Dirección de la eficiencia (MPG) entre dos ventanas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTrend {
    Up,
    Down,
    #[default]
    Stable,
}

/// Resultado del scorer para un vehículo
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReadiness {
    pub vehicle_id: Uuid,
    pub display_name: String,
    pub avg_mpg: Option<f64>,
    pub oil_status: OilStatus,
    pub miles_until_oil_change: i64,
    pub health_score: u8,
    pub is_stale_intel: bool,
    pub last_fuel_log_at: Option<DateTime<Utc>>,
    pub health_status: HealthStatus,
}

/// Resumen de flota completo para el panel de readiness
#[derive(Debug, Clone, Serialize)]
pub struct FleetReadinessReport {
    /// `None` cuando no hay vehículos configurados
    pub fleet_score: Option<u8>,
    pub fleet_status: Option<HealthStatus>,
    pub no_vehicles_configured: bool,
    pub efficiency_trend: EfficiencyTrend,
    pub vehicles: Vec<VehicleReadiness>,
}

/// Punto de la gráfica de MPG por vehículo
#[derive(Debug, Clone, Serialize)]
pub struct MpgPoint {
    pub date: DateTime<Utc>,
    pub mpg: f64,
}

/// Costo por milla real de un vehículo
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CpmSummary {
    pub total_fuel_cost: f64,
    pub total_miles: f64,
    pub cpm: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FuelLogStats {
    pub total_logs: usize,
    pub total_cost: f64,
    pub average_mpg: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MissionStats {
    pub total_missions: usize,
    pub total_miles: f64,
    pub total_earnings: f64,
    pub earnings_per_mile: f64,
}

/// Contadores del HUD: misiones activas, pendientes de POD y ganancias
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct EarningsSummary {
    pub active_missions: i64,
    pub pending_pod: i64,
    pub paid_earnings: f64,
    pub unpaid_earnings: f64,
}

/// Analítica completa de un vehículo
#[derive(Debug, Clone, Serialize)]
pub struct VehicleAnalytics {
    pub vehicle_id: Uuid,
    pub mpg_chart: Vec<MpgPoint>,
    pub trend: EfficiencyTrend,
    pub cpm: Option<CpmSummary>,
    pub fuel_stats: Option<FuelLogStats>,
    pub mission_stats: Option<MissionStats>,
}

/// Entrada del leaderboard semanal
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub username: String,
    pub rank: String,
    pub total_validations: i64,
}
