use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_not_blank, validate_positive_f64};

// Request para crear una misión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionRequest {
    pub vehicle_id: Uuid,
    #[validate(custom = "validate_not_blank")]
    pub origin: String,
    #[validate(custom = "validate_not_blank")]
    pub destination: String,
    pub offer_amount: Decimal,
    pub estimated_miles: f64,
    #[serde(default)]
    pub pod_required: bool,
}

// Request para corregir millas y pago
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMissionRequest {
    pub offer_amount: Decimal,
    pub estimated_miles: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CompleteMissionRequest {
    #[validate(range(min = 1))]
    pub final_odometer: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProofRequest {
    #[validate(url)]
    pub proof_image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ReassignRequest {
    pub vehicle_id: Uuid,
}

#[derive(Debug, Deserialize, Default)]
pub struct MissionQuery {
    pub vehicle_id: Option<Uuid>,
    pub status: Option<String>,
}

// Calculadora de rentabilidad; no toca la base de datos
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(custom = "validate_positive_f64")]
    pub offer_amount: f64,
    #[validate(range(min = 0.0))]
    pub total_miles: f64,
    pub mpg: Option<f64>,
    #[validate(range(min = 0.0))]
    pub fuel_price: f64,
}
