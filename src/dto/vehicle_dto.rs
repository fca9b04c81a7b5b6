use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges, DEFAULT_OIL_CHANGE_INTERVAL};
use crate::services::readiness_scorer;
use crate::utils::validation::validate_not_blank;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(custom = "validate_not_blank")]
    pub make: String,
    #[validate(custom = "validate_not_blank")]
    pub model: String,
    pub vehicle_type: Option<String>,
    pub usage_type: Option<String>,
    #[validate(range(min = 0))]
    pub current_odometer: i64,
    #[validate(range(min = 1))]
    pub oil_change_interval: Option<i64>,
}

impl CreateVehicleRequest {
    pub fn into_new_vehicle(self) -> NewVehicle {
        NewVehicle {
            name: self.name.trim().to_string(),
            year: self.year,
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            vehicle_type: self.vehicle_type.unwrap_or_else(|| "Car".to_string()),
            usage_type: self.usage_type.unwrap_or_else(|| "personal".to_string()),
            current_odometer: self.current_odometer,
            oil_change_interval: self.oil_change_interval.unwrap_or(DEFAULT_OIL_CHANGE_INTERVAL),
        }
    }
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    #[validate(custom = "validate_not_blank")]
    pub make: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    pub usage_type: Option<String>,
    #[validate(range(min = 0))]
    pub current_odometer: Option<i64>,
    #[validate(range(min = 1))]
    pub oil_change_interval: Option<i64>,
}

impl From<UpdateVehicleRequest> for VehicleChanges {
    fn from(req: UpdateVehicleRequest) -> Self {
        VehicleChanges {
            name: req.name,
            year: req.year,
            make: req.make,
            model: req.model,
            vehicle_type: req.vehicle_type,
            usage_type: req.usage_type,
            current_odometer: req.current_odometer,
            oil_change_interval: req.oil_change_interval,
        }
    }
}

// Request para registrar un cambio de aceite; sin odómetro usa el actual
#[derive(Debug, Deserialize, Validate, Default)]
pub struct OilChangeRequest {
    #[validate(range(min = 0))]
    pub odometer: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub display_name: String,
    pub miles_until_oil_change: i64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        let miles_until_oil_change = readiness_scorer::miles_until_oil_change(
            vehicle.current_odometer,
            vehicle.last_oil_change_odometer,
            vehicle.oil_change_interval,
        );

        Self {
            display_name: vehicle.display_name(),
            miles_until_oil_change,
            vehicle,
        }
    }
}
