use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, OilChangeRequest, UpdateVehicleRequest, VehicleResponse};
use crate::models::vehicle::{Vehicle, MAX_VEHICLES_PER_USER};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let owned = self.repository.count_by_user(user_id).await?;
        if owned >= MAX_VEHICLES_PER_USER {
            return Err(AppError::Forbidden(format!(
                "Free plan is limited to {} vehicles",
                MAX_VEHICLES_PER_USER
            )));
        }

        let vehicle = self.repository.create(user_id, request.into_new_vehicle()).await?;
        info!("🚚 Vehículo {} creado para usuario {}", vehicle.id, user_id);

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle created".to_string(),
        ))
    }

    pub async fn get(&self, id: Uuid, user_id: Uuid) -> Result<VehicleResponse, AppError> {
        self.owned(id, user_id).await.map(VehicleResponse::from)
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self
            .repository
            .update(id, user_id, request.into())
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle updated".to_string(),
        ))
    }

    pub async fn record_oil_change(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: OilChangeRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self
            .repository
            .record_oil_change(id, user_id, request.odometer)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        info!("🛢️ Cambio de aceite registrado en {} a {} millas", id, vehicle.last_oil_change_odometer);

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Oil change recorded".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id, user_id).await? {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }

    /// Vehículo del usuario o 404
    pub async fn owned(&self, id: Uuid, user_id: Uuid) -> Result<Vehicle, AppError> {
        self.repository
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }
}
