use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::query_dto::NewMileageQuery;
use crate::dto::response_dto::{ApiResponse, ExistsResponse};
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/license-plate/:plate", get(get_car_by_license_plate))
        .route("/:id", get(get_car).put(update_car).delete(delete_car))
        .route("/:id/mileage", put(update_car_mileage))
        .route("/:id/exists", get(car_exists))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_cars(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.list(&filters).await?))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn get_car_by_license_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.get_by_license_plate(&plate).await?))
}

async fn car_exists(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExistsResponse>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.exists(id).await?))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn update_car_mileage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewMileageQuery>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.update_mileage(id, query.new_mileage).await?))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.db.clone());
    Ok(Json(controller.delete(id).await?))
}
