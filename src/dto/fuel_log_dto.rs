use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// Request para registrar combustible o una lectura de odómetro
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub vehicle_id: Uuid,
    pub odometer_reading: i64,
    pub gallons_added: Option<f64>,
    pub total_cost: Option<Decimal>,
    #[serde(default)]
    pub odometer_only: bool,
    #[validate(length(max = 200))]
    pub reference: Option<String>,
}

// Request para editar un registro existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFuelLogRequest {
    pub odometer_reading: i64,
    pub gallons_added: Option<f64>,
    pub total_cost: Option<Decimal>,
    #[validate(length(max = 200))]
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FuelLogQuery {
    pub vehicle_id: Uuid,
}
