use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use crate::controllers::trip_controller::TripController;
use crate::dto::query_dto::{CarQuery, LimitQuery, NewDistanceQuery, NewDurationQuery, RecordQuery};
use crate::dto::response_dto::ApiResponse;
use crate::models::trip::{CreateTripRequest, UpdateTripRequest};
use crate::models::{MonthlyBucket, Trip, TripStatistics};
use crate::repositories::RecordFilter;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

/// Viajes devueltos por `/recent` si no se indica `limit`
const DEFAULT_RECENT_TRIPS: usize = 5;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/stats", get(trip_stats))
        .route("/monthly-distance", get(monthly_distance))
        .route("/recent", get(recent_trips))
        .route("/:id", get(get_trip).put(update_trip).delete(delete_trip))
        .route("/:id/distance", put(update_trip_distance))
        .route("/:id/duration", put(update_trip_duration))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(state.db.clone());
    let today = Utc::now().date_naive();
    Ok(Json(controller.create(request, today).await?))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let filter = query.to_filter()?;
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.list(&filter).await?))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn update_trip_distance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewDistanceQuery>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.update_distance(id, query.new_distance).await?))
}

async fn update_trip_duration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<NewDurationQuery>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.update_duration(id, query.new_duration).await?))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.delete(id).await?))
}

async fn trip_stats(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<TripStatistics>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.statistics(&query.filter()).await?))
}

async fn monthly_distance(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<Vec<MonthlyBucket>>, AppError> {
    let controller = TripController::new(state.db.clone());
    Ok(Json(controller.monthly_distance(&query.filter()).await?))
}

async fn recent_trips(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let controller = TripController::new(state.db.clone());
    let filter = RecordFilter::for_vehicle(query.car_id);
    Ok(Json(controller.recent(&filter, query.limit_or(DEFAULT_RECENT_TRIPS)).await?))
}
