pub mod car_routes;
pub mod trip_routes;
pub mod fuel_routes;
pub mod maintenance_routes;
pub mod dashboard_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Router de la API completa, sin capas de middleware
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/cars", car_routes::create_car_router())
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest("/api/fuel-entries", fuel_routes::create_fuel_router())
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "carlog-analytics",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
