use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::query_dto::{CarQuery, MaintenanceQuery, NewCostQuery, NewMileageQuery};
use crate::dto::response_dto::ApiResponse;
use crate::models::maintenance::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::models::{MaintenanceRecord, MaintenanceSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance).post(create_maintenance))
        .route("/overdue", get(overdue_maintenance))
        .route("/summary", get(maintenance_summary))
        .route("/:id", get(get_maintenance).put(update_maintenance).delete(delete_maintenance))
        .route("/:id/complete", put(complete_maintenance))
        .route("/:id/cost", put(update_maintenance_cost))
        .route("/:id/mileage", put(update_maintenance_mileage))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    let today = Utc::now().date_naive();
    Ok(Json(controller.create(request, today).await?))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> Result<Json<Vec<MaintenanceRecord>>, AppError> {
    let filters = query.to_filters()?;
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceRecord>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn complete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.mark_completed(id).await?))
}

async fn update_maintenance_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewCostQuery>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.update_cost(id, query.new_cost).await?))
}

async fn update_maintenance_mileage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewMileageQuery>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.update_mileage(id, query.new_mileage).await?))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.delete(id).await?))
}

async fn overdue_maintenance(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<Vec<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    let today = Utc::now().date_naive();
    Ok(Json(controller.overdue(query.car_id, today).await?))
}

async fn maintenance_summary(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<MaintenanceSummary>, AppError> {
    let controller = MaintenanceController::new(state.db.clone());
    Ok(Json(controller.summary(query.car_id).await?))
}
