use axum::{extract::State, routing::get, Json, Router};
use validator::Validate;

use crate::controllers::ProfileController;
use crate::dto::api_response::ApiResponse;
use crate::dto::profile_dto::UpdateProfileRequest;
use crate::middleware::AuthSession;
use crate::models::profile::Profile;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

async fn get_profile(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let profile = controller.get(session.user_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}

async fn update_profile(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    request.validate()?;
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.update(session.user_id, request).await?;
    Ok(Json(response))
}
