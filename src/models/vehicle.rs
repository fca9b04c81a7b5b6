//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como vive en la tabla
//! `vextor_vehicles`, con los campos de odómetro que consume el scorer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Intervalo de cambio de aceite por defecto (millas)
pub const DEFAULT_OIL_CHANGE_INTERVAL: i64 = 5000;

/// Límite de vehículos por usuario en el plan gratuito
pub const MAX_VEHICLES_PER_USER: i64 = 4;

/// Vehicle principal - mapea exactamente a la tabla vextor_vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
    pub usage_type: String,
    pub current_odometer: i64,
    pub oil_change_interval: i64,
    pub last_oil_change_odometer: i64,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Nombre para mostrar: "2019 Freightliner Cascadia"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Datos para insertar un vehículo nuevo
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
    pub usage_type: String,
    pub current_odometer: i64,
    pub oil_change_interval: i64,
}

/// Cambios parciales sobre un vehículo existente
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    pub usage_type: Option<String>,
    pub current_odometer: Option<i64>,
    pub oil_change_interval: Option<i64>,
}
