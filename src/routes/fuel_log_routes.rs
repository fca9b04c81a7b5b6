use axum::{
    extract::{Path, Query, State},
    routing::{post, put},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::controllers::FuelLogController;
use crate::dto::api_response::ApiResponse;
use crate::dto::fuel_log_dto::{CreateFuelLogRequest, FuelLogQuery, UpdateFuelLogRequest};
use crate::middleware::AuthSession;
use crate::models::fuel_log::FuelLog;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_log_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fuel_log).get(list_fuel_logs))
        .route("/:id", put(update_fuel_log).delete(delete_fuel_log))
}

async fn create_fuel_log(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLog>>, AppError> {
    request.validate()?;
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.create(session.user_id, request).await?;
    Ok(Json(response))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<FuelLogQuery>,
) -> Result<Json<ApiResponse<Vec<FuelLog>>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let logs = controller.list(session.user_id, query.vehicle_id).await?;
    Ok(Json(ApiResponse::success(logs)))
}

async fn update_fuel_log(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLog>>, AppError> {
    request.validate()?;
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.update(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn delete_fuel_log(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    controller.delete(id, session.user_id).await?;
    Ok(Json(ApiResponse::message_only("Fuel log deleted".to_string())))
}
