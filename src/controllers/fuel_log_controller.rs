use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::fuel_log_dto::{CreateFuelLogRequest, UpdateFuelLogRequest};
use crate::models::fuel_log::{FuelLog, NewFuelLog};
use crate::repositories::{FuelLogRepository, VehicleRepository};
use crate::services::fuel_math;
use crate::utils::errors::{not_found_error, AppError};

pub struct FuelLogController {
    fuel_logs: FuelLogRepository,
    vehicles: VehicleRepository,
}

impl FuelLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            fuel_logs: FuelLogRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Registra una carga o lectura y adelanta el odómetro del vehículo
    pub async fn create(&self, user_id: Uuid, request: CreateFuelLogRequest) -> Result<ApiResponse<FuelLog>, AppError> {
        fuel_math::check_new_reading(
            request.odometer_reading,
            request.gallons_added,
            request.total_cost,
            request.odometer_only,
        )?;

        self.vehicles
            .find_for_user(request.vehicle_id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        let previous = self.fuel_logs.latest_for_vehicle(request.vehicle_id, user_id).await?;
        let derived = fuel_math::derive_new_reading(
            previous.map(|log| log.odometer_reading),
            request.odometer_reading,
            request.gallons_added,
        )?;

        let log = self
            .fuel_logs
            .insert(
                user_id,
                NewFuelLog {
                    vehicle_id: request.vehicle_id,
                    odometer_reading: request.odometer_reading,
                    gallons_added: request.gallons_added,
                    total_cost: request.total_cost,
                    trip_miles: derived.trip_miles,
                    mpg: derived.mpg,
                    reference: request.reference,
                },
            )
            .await?;

        // Segunda escritura independiente: el registro ya quedó guardado
        if let Err(e) = self
            .vehicles
            .update_odometer(request.vehicle_id, user_id, request.odometer_reading)
            .await
        {
            warn!("⚠️ Registro {} guardado pero el odómetro no se actualizó: {}", log.id, e);
        }

        info!("⛽ Registro {} creado (viaje: {:?} mi, mpg: {:?})", log.id, log.trip_miles, log.mpg);

        let message = if request.odometer_only {
            "Odometer updated"
        } else {
            "Fuel log added"
        };
        Ok(ApiResponse::success_with_message(log, message.to_string()))
    }

    pub async fn list(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<Vec<FuelLog>, AppError> {
        self.fuel_logs.list_for_vehicle(vehicle_id, user_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLog>, AppError> {
        let existing = self
            .fuel_logs
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Fuel log", &id.to_string()))?;

        let (previous, next) = self.fuel_logs.neighbours(&existing).await?;
        let derived = fuel_math::derive_edited_reading(
            previous.map(|log| log.odometer_reading),
            next.map(|log| log.odometer_reading),
            request.odometer_reading,
            request.gallons_added,
        )?;

        let log = self
            .fuel_logs
            .update(
                id,
                user_id,
                request.odometer_reading,
                request.gallons_added,
                request.total_cost,
                derived.trip_miles,
                derived.mpg,
                request.reference,
            )
            .await?
            .ok_or_else(|| not_found_error("Fuel log", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(log, "Fuel log updated".to_string()))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !self.fuel_logs.delete(id, user_id).await? {
            return Err(not_found_error("Fuel log", &id.to_string()));
        }
        Ok(())
    }
}
