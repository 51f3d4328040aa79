use crate::database::MemoryDatabase;
use crate::models::trip::{CreateTripRequest, UpdateTripRequest};
use crate::models::Trip;
use crate::repositories::RecordFilter;
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct TripRepository {
    db: MemoryDatabase,
}

impl TripRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }

    /// `today` se usa cuando la request no trae fecha
    pub async fn create(&self, request: CreateTripRequest, today: NaiveDate) -> Result<Trip, AppError> {
        let mut tables = self.db.write().await;

        if !tables.vehicle_exists(request.car_id) {
            return Err(not_found_error("Car", &request.car_id.to_string()));
        }

        let trip = Trip {
            id: Uuid::new_v4(),
            car_id: request.car_id,
            date: request.date.unwrap_or(today),
            start_location: request.start_location.trim().to_string(),
            end_location: request.end_location.trim().to_string(),
            distance: request.distance,
            duration: request.duration.unwrap_or(0),
        };

        tables.trips.push(trip.clone());
        Ok(trip)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let tables = self.db.read().await;
        Ok(tables.trips.iter().find(|t| t.id == id).cloned())
    }

    /// Viajes que cumplen el filtro, del más reciente al más antiguo
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<Trip>, AppError> {
        let mut trips: Vec<Trip> = {
            let tables = self.db.read().await;
            tables
                .trips
                .iter()
                .filter(|t| filter.matches(t.car_id, t.date))
                .cloned()
                .collect()
        };
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(trips)
    }

    pub async fn update(&self, id: Uuid, request: UpdateTripRequest) -> Result<Trip, AppError> {
        let mut tables = self.db.write().await;
        let trip = tables
            .trips
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found_error("Trip", &id.to_string()))?;

        if let Some(date) = request.date {
            trip.date = date;
        }
        if let Some(start) = request.start_location {
            trip.start_location = start.trim().to_string();
        }
        if let Some(end) = request.end_location {
            trip.end_location = end.trim().to_string();
        }
        if let Some(distance) = request.distance {
            trip.distance = distance;
        }
        if let Some(duration) = request.duration {
            trip.duration = duration;
        }

        Ok(trip.clone())
    }

    pub async fn update_distance(&self, id: Uuid, distance: f64) -> Result<Trip, AppError> {
        self.update(
            id,
            UpdateTripRequest {
                distance: Some(distance),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_duration(&self, id: Uuid, duration: u32) -> Result<Trip, AppError> {
        self.update(
            id,
            UpdateTripRequest {
                duration: Some(duration),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.db.write().await;
        let before = tables.trips.len();
        tables.trips.retain(|t| t.id != id);
        if tables.trips.len() == before {
            return Err(not_found_error("Trip", &id.to_string()));
        }
        Ok(())
    }
}
