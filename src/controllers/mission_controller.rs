use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::api_response::ApiResponse;
use crate::dto::mission_dto::{
    CompleteMissionRequest, CreateMissionRequest, MissionQuery, ProofRequest, QuoteRequest, ReassignRequest,
    UpdateMissionRequest,
};
use crate::models::mission::{Mission, MissionStatus, NewMission};
use crate::repositories::{MissionRepository, VehicleRepository};
use crate::services::mission_economics::{self, decimal_to_f64, MissionQuote};
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct MissionController {
    missions: MissionRepository,
    vehicles: VehicleRepository,
}

impl MissionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            missions: MissionRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, user_id: Uuid, request: CreateMissionRequest) -> Result<ApiResponse<Mission>, AppError> {
        let cost_per_mile =
            mission_economics::cost_per_mile(decimal_to_f64(request.offer_amount), request.estimated_miles)?;

        self.vehicles
            .find_for_user(request.vehicle_id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        let mission = self
            .missions
            .create(
                user_id,
                NewMission {
                    vehicle_id: request.vehicle_id,
                    origin: request.origin.trim().to_string(),
                    destination: request.destination.trim().to_string(),
                    offer_amount: request.offer_amount,
                    estimated_miles: request.estimated_miles,
                    cost_per_mile,
                    pod_required: request.pod_required,
                },
            )
            .await?;

        info!("🎯 Misión {} creada: {} -> {}", mission.id, mission.origin, mission.destination);
        Ok(ApiResponse::success_with_message(mission, "Mission created".to_string()))
    }

    pub async fn list(&self, user_id: Uuid, query: MissionQuery) -> Result<Vec<Mission>, AppError> {
        let status = query
            .status
            .as_deref()
            .map(str::parse::<MissionStatus>)
            .transpose()
            .map_err(|e| bad_request_error(&e))?;

        self.missions.list(user_id, query.vehicle_id, status).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateMissionRequest,
    ) -> Result<ApiResponse<Mission>, AppError> {
        let cost_per_mile =
            mission_economics::cost_per_mile(decimal_to_f64(request.offer_amount), request.estimated_miles)?;

        let mission = self
            .missions
            .update_estimate(id, user_id, request.offer_amount, request.estimated_miles, cost_per_mile)
            .await?
            .ok_or_else(|| not_found_error("Mission", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(mission, "Mission updated".to_string()))
    }

    /// Cierra la misión con el odómetro final y adelanta el del vehículo
    pub async fn complete(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: CompleteMissionRequest,
    ) -> Result<ApiResponse<Mission>, AppError> {
        let mission = self.owned(id, user_id).await?;
        if mission.status() != MissionStatus::Active {
            return Err(AppError::Conflict(format!("Mission is already {}", mission.status())));
        }

        let vehicle = self
            .vehicles
            .find_for_user(mission.vehicle_id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &mission.vehicle_id.to_string()))?;

        let completion =
            mission_economics::complete(vehicle.current_odometer, request.final_odometer, mission.pod_required)?;

        let mission = self
            .missions
            .complete(id, user_id, &completion)
            .await?
            .ok_or_else(|| AppError::Conflict("Mission is no longer active".to_string()))?;

        if let Err(e) = self
            .vehicles
            .update_odometer(vehicle.id, user_id, completion.final_odometer)
            .await
        {
            warn!("⚠️ Misión {} cerrada pero el odómetro no se actualizó: {}", id, e);
        }

        info!("🏁 Misión {} cerrada: {} millas, estado {}", id, completion.actual_miles, completion.status);

        let message = match completion.status {
            MissionStatus::PendingPod => "Mission complete, proof of delivery pending",
            _ => "Mission complete",
        };
        Ok(ApiResponse::success_with_message(mission, message.to_string()))
    }

    pub async fn attach_proof(&self, id: Uuid, user_id: Uuid, request: ProofRequest) -> Result<ApiResponse<Mission>, AppError> {
        let mission = self.owned(id, user_id).await?;
        if mission.status() != MissionStatus::PendingPod {
            return Err(AppError::Conflict("Mission is not awaiting proof of delivery".to_string()));
        }

        let mission = self
            .missions
            .attach_proof(id, user_id, &request.proof_image_url)
            .await?
            .ok_or_else(|| AppError::Conflict("Mission is not awaiting proof of delivery".to_string()))?;

        Ok(ApiResponse::success_with_message(mission, "Proof of delivery attached".to_string()))
    }

    pub async fn reassign(&self, id: Uuid, user_id: Uuid, request: ReassignRequest) -> Result<ApiResponse<Mission>, AppError> {
        self.vehicles
            .find_for_user(request.vehicle_id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        let mission = self
            .missions
            .reassign(id, user_id, request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Mission", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(mission, "Mission reassigned".to_string()))
    }

    pub async fn toggle_paid(&self, id: Uuid, user_id: Uuid) -> Result<ApiResponse<Mission>, AppError> {
        let mission = self
            .missions
            .toggle_paid(id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Mission", &id.to_string()))?;

        let message = if mission.is_paid { "Marked as paid" } else { "Marked as unpaid" };
        Ok(ApiResponse::success_with_message(mission, message.to_string()))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !self.missions.delete(id, user_id).await? {
            return Err(not_found_error("Mission", &id.to_string()));
        }
        Ok(())
    }

    /// Cotización pura, sin acceso a datos
    pub fn quote(request: &QuoteRequest) -> MissionQuote {
        mission_economics::quote(request.offer_amount, request.total_miles, request.mpg, request.fuel_price)
    }

    async fn owned(&self, id: Uuid, user_id: Uuid) -> Result<Mission, AppError> {
        self.missions
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Mission", &id.to_string()))
    }
}
