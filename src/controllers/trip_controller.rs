use crate::analysis::aggregator;
use crate::database::MemoryDatabase;
use crate::dto::response_dto::ApiResponse;
use crate::models::trip::{CreateTripRequest, UpdateTripRequest};
use crate::models::{MonthlyBucket, Trip, TripStatistics};
use crate::repositories::{RecordFilter, TripRepository};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{into_app_error, validate_non_negative, validate_not_empty};
use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(db: MemoryDatabase) -> Self {
        Self {
            repository: TripRepository::new(db),
        }
    }

    pub async fn create(&self, request: CreateTripRequest, today: NaiveDate) -> Result<ApiResponse<Trip>, AppError> {
        request.validate()?;
        into_app_error("startLocation", validate_not_empty(&request.start_location))?;
        into_app_error("endLocation", validate_not_empty(&request.end_location))?;
        into_app_error("distance", validate_non_negative(request.distance))?;

        let trip = self.repository.create(request, today).await?;
        info!("🧭 Trip created: {} ({} km)", trip.title(), trip.distance);

        Ok(ApiResponse::success_with_message(trip, "Trip created successfully"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Trip, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Trip", &id.to_string()))
    }

    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<Trip>, AppError> {
        self.repository.list(filter).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateTripRequest) -> Result<ApiResponse<Trip>, AppError> {
        request.validate()?;
        if let Some(distance) = request.distance {
            into_app_error("distance", validate_non_negative(distance))?;
        }

        let trip = self.repository.update(id, request).await?;
        info!("✏️ Trip {} updated", trip.id);

        Ok(ApiResponse::success_with_message(trip, "Trip updated successfully"))
    }

    pub async fn update_distance(&self, id: Uuid, distance: f64) -> Result<ApiResponse<Trip>, AppError> {
        into_app_error("newDistance", validate_non_negative(distance))?;
        let trip = self.repository.update_distance(id, distance).await?;

        Ok(ApiResponse::success_with_message(trip, "Distance updated successfully"))
    }

    pub async fn update_duration(&self, id: Uuid, duration: u32) -> Result<ApiResponse<Trip>, AppError> {
        let trip = self.repository.update_duration(id, duration).await?;

        Ok(ApiResponse::success_with_message(trip, "Duration updated successfully"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Trip {} deleted", id);

        Ok(ApiResponse::message_only("Trip deleted successfully"))
    }

    pub async fn statistics(&self, filter: &RecordFilter) -> Result<TripStatistics, AppError> {
        let trips = self.repository.list(filter).await?;
        debug!("📊 Trip statistics over {} trips", trips.len());
        Ok(aggregator::trip_statistics(&trips))
    }

    pub async fn monthly_distance(&self, filter: &RecordFilter) -> Result<Vec<MonthlyBucket>, AppError> {
        let trips = self.repository.list(filter).await?;
        Ok(aggregator::monthly_distance(&trips))
    }

    /// Los `limit` viajes más recientes
    pub async fn recent(&self, filter: &RecordFilter, limit: usize) -> Result<Vec<Trip>, AppError> {
        let mut trips = self.repository.list(filter).await?;
        trips.truncate(limit);
        Ok(trips)
    }
}
