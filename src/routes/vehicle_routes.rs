use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::controllers::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, OilChangeRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::AuthSession;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
        .route("/:id/oil-change", post(record_oil_change))
}

async fn create_vehicle(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    request.validate()?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(session.user_id, request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list(session.user_id).await?;
    Ok(Json(ApiResponse::success(vehicles)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicle = controller.get(id, session.user_id).await?;
    Ok(Json(ApiResponse::success(vehicle)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    request.validate()?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn record_oil_change(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    request: Option<Json<OilChangeRequest>>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    request.validate()?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.record_oil_change(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id, session.user_id).await?;
    Ok(Json(ApiResponse::message_only("Vehicle deleted".to_string())))
}
