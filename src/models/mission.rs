//! Modelo de Mission
//!
//! Una misión es un trabajo de entrega con pago ofrecido y millaje.
//! El estado se guarda como texto en `vextor_missions.status`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Ciclo de vida: active -> completed | pending_pod -> history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Active,
    Completed,
    PendingPod,
    History,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Active => "active",
            MissionStatus::Completed => "completed",
            MissionStatus::PendingPod => "pending_pod",
            MissionStatus::History => "history",
        }
    }

    /// Estados que cuentan como misión terminada para estadísticas
    pub fn finished() -> [MissionStatus; 2] {
        [MissionStatus::Completed, MissionStatus::History]
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MissionStatus::Active),
            "completed" => Ok(MissionStatus::Completed),
            "pending_pod" => Ok(MissionStatus::PendingPod),
            "history" => Ok(MissionStatus::History),
            other => Err(format!("Estado de misión desconocido: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub offer_amount: Decimal,
    pub estimated_miles: f64,
    pub actual_miles: Option<f64>,
    pub cost_per_mile: f64,
    pub status: String,
    pub pod_required: bool,
    pub proof_uploaded: bool,
    pub proof_image_url: Option<String>,
    pub is_paid: bool,
    pub delivery_timestamp: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Mission {
    /// Estado tipado; filas con texto desconocido se tratan como activas
    pub fn status(&self) -> MissionStatus {
        self.status.parse().unwrap_or(MissionStatus::Active)
    }
}

/// Datos para insertar una misión
#[derive(Debug, Clone)]
pub struct NewMission {
    pub vehicle_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub offer_amount: Decimal,
    pub estimated_miles: f64,
    pub cost_per_mile: f64,
    pub pod_required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_text() {
        for status in [
            MissionStatus::Active,
            MissionStatus::Completed,
            MissionStatus::PendingPod,
            MissionStatus::History,
        ] {
            assert_eq!(status.as_str().parse::<MissionStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("archived".parse::<MissionStatus>().is_err());
    }
}
