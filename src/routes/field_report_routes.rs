use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::controllers::FieldReportController;
use crate::dto::api_response::ApiResponse;
use crate::dto::field_report_dto::{HoldReportRequest, PublishReportRequest, SubmitFieldReportRequest};
use crate::middleware::{AdminSession, AuthSession};
use crate::models::analytics::LeaderboardEntry;
use crate::models::field_report::{FieldReport, FieldReportWithAuthor};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// `/api/field-reports`: envío y listado propio
pub fn create_field_report_router() -> Router<AppState> {
    Router::new().route("/", post(submit_report).get(list_own_reports))
}

/// `/api/intel`: moderación, solo administradores
pub fn create_intel_router() -> Router<AppState> {
    Router::new()
        .route("/queue", get(intel_queue))
        .route("/:id/publish", post(publish_report))
        .route("/:id/hold", post(hold_report))
}

/// `/public`: páginas públicas sin autenticación
pub fn create_public_router() -> Router<AppState> {
    Router::new()
        .route("/intel/:slug", get(public_report))
        .route("/leaderboard", get(leaderboard))
}

async fn submit_report(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<SubmitFieldReportRequest>,
) -> Result<Json<ApiResponse<FieldReport>>, AppError> {
    request.validate()?;
    let controller = FieldReportController::new(state.pool.clone());
    let response = controller.submit(session.user_id, request).await?;
    Ok(Json(response))
}

async fn list_own_reports(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<ApiResponse<Vec<FieldReport>>>, AppError> {
    let controller = FieldReportController::new(state.pool.clone());
    let reports = controller.list_own(session.user_id).await?;
    Ok(Json(ApiResponse::success(reports)))
}

async fn intel_queue(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<ApiResponse<Vec<FieldReportWithAuthor>>>, AppError> {
    let controller = FieldReportController::new(state.pool.clone());
    let queue = controller.queue().await?;
    Ok(Json(ApiResponse::success(queue)))
}

async fn publish_report(
    State(state): State<AppState>,
    AdminSession(admin): AdminSession,
    Path(id): Path<Uuid>,
    request: Option<Json<PublishReportRequest>>,
) -> Result<Json<ApiResponse<FieldReport>>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    request.validate()?;
    let controller = FieldReportController::new(state.pool.clone());
    let response = controller.publish(id, admin.user_id, request).await?;
    Ok(Json(response))
}

async fn hold_report(
    State(state): State<AppState>,
    AdminSession(admin): AdminSession,
    Path(id): Path<Uuid>,
    request: Option<Json<HoldReportRequest>>,
) -> Result<Json<ApiResponse<FieldReport>>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    request.validate()?;
    let controller = FieldReportController::new(state.pool.clone());
    let response = controller.hold(id, admin.user_id, request).await?;
    Ok(Json(response))
}

async fn public_report(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<FieldReportWithAuthor>>, AppError> {
    let controller = FieldReportController::new(state.pool.clone());
    let report = controller.public_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(report)))
}

async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LeaderboardEntry>>>, AppError> {
    let controller = FieldReportController::new(state.pool.clone());
    let board = controller.leaderboard().await?;
    Ok(Json(ApiResponse::success(board)))
}
