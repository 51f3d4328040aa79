use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use crate::controllers::fuel_controller::FuelController;
use crate::dto::query_dto::{CarQuery, FuelEntryQuery, NewCostQuery, NewLitersQuery};
use crate::dto::response_dto::ApiResponse;
use crate::models::fuel_entry::{CreateFuelEntryRequest, UpdateFuelEntryRequest};
use crate::models::{EfficiencyReport, FuelEntry, FuelSummary, MonthlyBucket};
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_entries).post(create_fuel_entry))
        .route("/stats", get(fuel_stats))
        .route("/stats/efficiency", get(fuel_efficiency))
        .route("/monthly-costs", get(monthly_costs))
        .route("/:id", get(get_fuel_entry).put(update_fuel_entry).delete(delete_fuel_entry))
        .route("/:id/cost", put(update_fuel_cost))
        .route("/:id/liters", put(update_fuel_liters))
}

async fn create_fuel_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelEntryRequest>,
) -> Result<Json<ApiResponse<FuelEntry>>, AppError> {
    let controller = FuelController::new(state.db.clone());
    let today = Utc::now().date_naive();
    Ok(Json(controller.create(request, today).await?))
}

async fn list_fuel_entries(
    State(state): State<AppState>,
    Query(query): Query<FuelEntryQuery>,
) -> Result<Json<Vec<FuelEntry>>, AppError> {
    let filter = query.to_filter()?;
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.list(&filter, query.fuel_type()).await?))
}

async fn get_fuel_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FuelEntry>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_fuel_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuelEntryRequest>,
) -> Result<Json<ApiResponse<FuelEntry>>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn update_fuel_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewCostQuery>,
) -> Result<Json<ApiResponse<FuelEntry>>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.update_cost(id, query.new_cost).await?))
}

async fn update_fuel_liters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewLitersQuery>,
) -> Result<Json<ApiResponse<FuelEntry>>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.update_liters(id, query.new_liters).await?))
}

async fn delete_fuel_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.delete(id).await?))
}

async fn fuel_stats(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<FuelSummary>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.summary(&query.filter()).await?))
}

async fn fuel_efficiency(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<EfficiencyReport>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.efficiency(&query.filter()).await?))
}

async fn monthly_costs(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<Vec<MonthlyBucket>>, AppError> {
    let controller = FuelController::new(state.db.clone());
    Ok(Json(controller.monthly_costs(&query.filter()).await?))
}
