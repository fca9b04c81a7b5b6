//! Router de la aplicación
//!
//! `create_app_router` arma todas las rutas con CORS y trazas; `main` y los
//! tests de integración usan la misma función.

pub mod analytics_routes;
pub mod expense_routes;
pub mod field_report_routes;
pub mod fuel_log_routes;
pub mod mission_routes;
pub mod profile_routes;
pub mod vehicle_routes;
pub mod weather_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/fuel-logs", fuel_log_routes::create_fuel_log_router())
        .nest("/missions", mission_routes::create_mission_router())
        .nest("/expenses", expense_routes::create_expense_router())
        .nest("/analytics", analytics_routes::create_analytics_router())
        .nest("/profile", profile_routes::create_profile_router())
        .nest("/field-reports", field_report_routes::create_field_report_router())
        .nest("/intel", field_report_routes::create_intel_router())
        .nest("/weather", weather_routes::create_weather_router(state.clone()));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .nest("/public", field_report_routes::create_public_router())
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vextor_grid",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
