use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::query_dto::{CarQuery, LimitQuery};
use crate::models::{ActivityItem, DashboardSummary, Vehicle};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/recent-activity", get(recent_activity))
        .route("/selected-vehicle", get(selected_vehicle))
}

async fn dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.records.clone());
    let limit = query.limit_or(state.config.recent_activity_limit);
    Ok(Json(controller.stats(query.car_id, limit, Utc::now()).await?))
}

async fn recent_activity(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<ActivityItem>>, AppError> {
    let controller = DashboardController::new(state.records.clone());
    let limit = query.limit_or(state.config.recent_activity_limit);
    Ok(Json(controller.recent_activity(query.car_id, limit, Utc::now()).await?))
}

async fn selected_vehicle(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<Vehicle>, AppError> {
    let car_id = query
        .car_id
        .ok_or_else(|| bad_request_error("carId is required"))?;
    let controller = DashboardController::new(state.records.clone());
    Ok(Json(controller.selected_vehicle(car_id).await?))
}
