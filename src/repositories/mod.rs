//! Repositorios
//!
//! Un repositorio por entidad sobre `MemoryDatabase`, más el trait
//! `RecordSource` con el que la capa de analítica lee colecciones filtradas.

pub mod vehicle_repository;
pub mod trip_repository;
pub mod fuel_repository;
pub mod maintenance_repository;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::MemoryDatabase;
use crate::models::maintenance::MaintenanceFilters;
use crate::models::{FuelEntry, MaintenanceRecord, Trip, Vehicle};
use crate::utils::errors::AppResult;

pub use fuel_repository::FuelRepository;
pub use maintenance_repository::MaintenanceRepository;
pub use trip_repository::TripRepository;
pub use vehicle_repository::VehicleRepository;

/// Filtro por vehículo y rango de fechas (ambos extremos incluidos)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordFilter {
    pub car_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn for_vehicle(car_id: Option<Uuid>) -> Self {
        Self {
            car_id,
            ..Default::default()
        }
    }

    pub fn matches(&self, car_id: Uuid, date: NaiveDate) -> bool {
        self.car_id.map_or(true, |id| id == car_id)
            && self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }
}

/// Origen de los registros que consume el motor de métricas
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_vehicles(&self) -> AppResult<Vec<Vehicle>>;
    async fn fetch_trips(&self, filter: &RecordFilter) -> AppResult<Vec<Trip>>;
    async fn fetch_fuel_entries(&self, filter: &RecordFilter) -> AppResult<Vec<FuelEntry>>;
    async fn fetch_maintenance(&self, filters: &MaintenanceFilters) -> AppResult<Vec<MaintenanceRecord>>;
}

#[async_trait]
impl RecordSource for MemoryDatabase {
    async fn fetch_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.read().await.vehicles.clone())
    }

    async fn fetch_trips(&self, filter: &RecordFilter) -> AppResult<Vec<Trip>> {
        TripRepository::new(self.clone()).list(filter).await
    }

    async fn fetch_fuel_entries(&self, filter: &RecordFilter) -> AppResult<Vec<FuelEntry>> {
        FuelRepository::new(self.clone()).list(filter).await
    }

    async fn fetch_maintenance(&self, filters: &MaintenanceFilters) -> AppResult<Vec<MaintenanceRecord>> {
        MaintenanceRepository::new(self.clone()).list(filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::demo_tables;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let car = Uuid::new_v4();
        let filter = RecordFilter {
            car_id: Some(car),
            start_date: Some(date(2024, 1, 5)),
            end_date: Some(date(2024, 1, 10)),
        };

        assert!(filter.matches(car, date(2024, 1, 5)));
        assert!(filter.matches(car, date(2024, 1, 10)));
        assert!(!filter.matches(car, date(2024, 1, 11)));
        assert!(!filter.matches(Uuid::new_v4(), date(2024, 1, 7)));
        assert!(RecordFilter::default().matches(Uuid::new_v4(), date(1999, 1, 1)));
    }

    #[tokio::test]
    async fn test_memory_database_as_record_source() {
        let source: std::sync::Arc<dyn RecordSource> =
            std::sync::Arc::new(MemoryDatabase::with_tables(demo_tables()));

        let vehicles = source.fetch_vehicles().await.unwrap();
        assert_eq!(vehicles.len(), 2);

        let camry_fuel = source
            .fetch_fuel_entries(&RecordFilter::for_vehicle(Some(vehicles[0].id)))
            .await
            .unwrap();
        assert_eq!(camry_fuel.len(), 2);

        let all_trips = source.fetch_trips(&RecordFilter::default()).await.unwrap();
        assert_eq!(all_trips.len(), 3);

        let maintenance = source.fetch_maintenance(&MaintenanceFilters::default()).await.unwrap();
        assert_eq!(maintenance.len(), 3);
    }
}
