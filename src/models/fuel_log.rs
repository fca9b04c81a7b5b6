//! Modelo de FuelLog
//!
//! Cada fila de `vextor_fuel_logs` es una carga de combustible o una lectura
//! de odómetro sin carga. `trip_miles` y `mpg` se derivan al escribir.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub odometer_reading: i64,
    pub gallons_added: Option<f64>,
    pub total_cost: Option<Decimal>,
    pub trip_miles: Option<i64>,
    pub mpg: Option<f64>,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Muestra de MPG con su timestamp, lo único que necesitan las tendencias
#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow)]
pub struct MpgSample {
    pub mpg: f64,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un registro de combustible ya derivado
#[derive(Debug, Clone)]
pub struct NewFuelLog {
    pub vehicle_id: Uuid,
    pub odometer_reading: i64,
    pub gallons_added: Option<f64>,
    pub total_cost: Option<Decimal>,
    pub trip_miles: Option<i64>,
    pub mpg: Option<f64>,
    pub reference: Option<String>,
}
