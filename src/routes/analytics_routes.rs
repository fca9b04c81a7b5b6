use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::AnalyticsController;
use crate::dto::api_response::ApiResponse;
use crate::middleware::AuthSession;
use crate::models::analytics::{EarningsSummary, EfficiencyTrend, FleetReadinessReport, VehicleAnalytics};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/readiness", get(fleet_readiness))
        .route("/vehicles/:id", get(vehicle_analytics))
        .route("/earnings", get(earnings))
}

/// La gráfica conserva la última tendencia mostrada cuando faltan muestras
#[derive(Debug, Deserialize, Default)]
struct VehicleAnalyticsQuery {
    previous_trend: Option<EfficiencyTrend>,
}

async fn fleet_readiness(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<ApiResponse<FleetReadinessReport>>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    let report = controller.fleet_readiness(session.user_id).await?;
    Ok(Json(ApiResponse::success(report)))
}

async fn vehicle_analytics(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Query(query): Query<VehicleAnalyticsQuery>,
) -> Result<Json<ApiResponse<VehicleAnalytics>>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    let analytics = controller
        .vehicle_analytics(id, session.user_id, query.previous_trend.unwrap_or_default())
        .await?;
    Ok(Json(ApiResponse::success(analytics)))
}

async fn earnings(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<ApiResponse<EarningsSummary>>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    let summary = controller.earnings(session.user_id).await?;
    Ok(Json(ApiResponse::success(summary)))
}
