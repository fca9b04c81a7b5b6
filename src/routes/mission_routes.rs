use axum::{
    extract::{Path, Query, State},
    routing::{post, put},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::controllers::MissionController;
use crate::dto::api_response::ApiResponse;
use crate::dto::mission_dto::{
    CompleteMissionRequest, CreateMissionRequest, MissionQuery, ProofRequest, QuoteRequest, ReassignRequest,
    UpdateMissionRequest,
};
use crate::middleware::AuthSession;
use crate::models::mission::Mission;
use crate::services::mission_economics::MissionQuote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mission_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_mission).get(list_missions))
        .route("/quote", post(quote_mission))
        .route("/:id", put(update_mission).delete(delete_mission))
        .route("/:id/complete", post(complete_mission))
        .route("/:id/proof", post(attach_proof))
        .route("/:id/reassign", post(reassign_mission))
        .route("/:id/toggle-paid", post(toggle_paid))
}

async fn create_mission(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<CreateMissionRequest>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    request.validate()?;
    let controller = MissionController::new(state.pool.clone());
    let response = controller.create(session.user_id, request).await?;
    Ok(Json(response))
}

async fn list_missions(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<MissionQuery>,
) -> Result<Json<ApiResponse<Vec<Mission>>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let missions = controller.list(session.user_id, query).await?;
    Ok(Json(ApiResponse::success(missions)))
}

async fn update_mission(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMissionRequest>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    request.validate()?;
    let controller = MissionController::new(state.pool.clone());
    let response = controller.update(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn complete_mission(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteMissionRequest>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    request.validate()?;
    let controller = MissionController::new(state.pool.clone());
    let response = controller.complete(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn attach_proof(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<ProofRequest>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    request.validate()?;
    let controller = MissionController::new(state.pool.clone());
    let response = controller.attach_proof(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn reassign_mission(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<ReassignRequest>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let response = controller.reassign(id, session.user_id, request).await?;
    Ok(Json(response))
}

async fn toggle_paid(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let response = controller.toggle_paid(id, session.user_id).await?;
    Ok(Json(response))
}

async fn delete_mission(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    controller.delete(id, session.user_id).await?;
    Ok(Json(ApiResponse::message_only("Mission deleted".to_string())))
}

// La calculadora no toca la base de datos, pero sigue exigiendo sesión
async fn quote_mission(
    _session: AuthSession,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<MissionQuote>>, AppError> {
    request.validate()?;
    Ok(Json(ApiResponse::success(MissionController::quote(&request))))
}
