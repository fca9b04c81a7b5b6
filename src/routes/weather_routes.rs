use axum::{extract::State, middleware, routing::post, Json, Router};
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::weather_dto::{WeatherRequest, WeatherResponse};
use crate::middleware::{rate_limit_middleware, AuthSession};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

/// `/api/weather`, con rate limiting por IP
pub fn create_weather_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(current_weather))
        .route_layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}

async fn current_weather(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<ApiResponse<WeatherResponse>>, AppError> {
    let zip_code = request
        .zip_code
        .as_deref()
        .map(str::trim)
        .filter(|zip| !zip.is_empty())
        .ok_or_else(|| bad_request_error("Zip code is required"))?
        .to_string();
    request.validate()?;

    info!("🌦️ Clima solicitado por {} para {}", session.user_id, zip_code);
    let weather = state.weather.current_weather(&zip_code).await?;
    Ok(Json(ApiResponse::success(weather)))
}
