use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::{build_dashboard_summary, recency, DashboardInput};
use crate::models::{ActivityItem, DashboardSummary, Vehicle};
use crate::repositories::{RecordFilter, RecordSource};
use crate::utils::errors::{not_found_error, AppError};

/// Lee las colecciones a través de `RecordSource` y delega en el motor puro
pub struct DashboardController {
    records: Arc<dyn RecordSource>,
}

impl DashboardController {
    pub fn new(records: Arc<dyn RecordSource>) -> Self {
        Self { records }
    }

    pub async fn stats(
        &self,
        selected_vehicle: Option<Uuid>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary, AppError> {
        let filter = RecordFilter::for_vehicle(selected_vehicle);
        let (vehicles, trips, fuel_entries) = tokio::try_join!(
            self.records.fetch_vehicles(),
            self.records.fetch_trips(&filter),
            self.records.fetch_fuel_entries(&filter),
        )?;

        if let Some(car_id) = selected_vehicle {
            if !vehicles.iter().any(|v| v.id == car_id) {
                return Err(not_found_error("Car", &car_id.to_string()));
            }
        }

        debug!(
            "📊 Dashboard input: {} cars, {} trips, {} fuel entries",
            vehicles.len(),
            trips.len(),
            fuel_entries.len()
        );

        let summary = build_dashboard_summary(DashboardInput {
            vehicles: &vehicles,
            trips: &trips,
            fuel_entries: &fuel_entries,
            selected_vehicle,
            now,
            activity_limit: limit,
        });

        info!(
            "📊 Dashboard built: {} trips, {:.1} km, ${:.2} fuel",
            summary.trip_count, summary.total_distance, summary.total_fuel_cost
        );
        Ok(summary)
    }

    /// Vehículo activo del dashboard
    pub async fn selected_vehicle(&self, car_id: Uuid) -> Result<Vehicle, AppError> {
        let vehicles = self.records.fetch_vehicles().await?;
        vehicles
            .into_iter()
            .find(|v| v.id == car_id)
            .ok_or_else(|| not_found_error("Car", &car_id.to_string()))
    }

    pub async fn recent_activity(
        &self,
        selected_vehicle: Option<Uuid>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<ActivityItem>, AppError> {
        let filter = RecordFilter::for_vehicle(selected_vehicle);
        let (trips, fuel_entries) = tokio::try_join!(
            self.records.fetch_trips(&filter),
            self.records.fetch_fuel_entries(&filter),
        )?;

        Ok(recency::recent_activity(&trips, &fuel_entries, now, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::demo_tables;
    use crate::database::MemoryDatabase;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
    }

    fn controller() -> (DashboardController, MemoryDatabase) {
        let db = MemoryDatabase::with_tables(demo_tables());
        (DashboardController::new(Arc::new(db.clone())), db)
    }

    #[tokio::test]
    async fn test_stats_for_whole_fleet() {
        let (controller, _) = controller();
        let summary = controller.stats(None, 4, at("2024-01-16T09:00:00Z")).await.unwrap();

        assert_eq!(summary.vehicle_count, 2);
        assert_eq!(summary.trip_count, 3);
        assert_eq!(summary.this_month_trip_count, 3);
        assert_eq!(summary.recent_activity.len(), 4);
        assert_eq!(summary.recent_activity[0].title, "Home → Work");
        assert_eq!(summary.recent_activity[0].relative_label, "1 day ago");
    }

    #[tokio::test]
    async fn test_stats_for_selected_vehicle() {
        let (controller, db) = controller();
        let civic = db.read().await.vehicles[1].id;

        let summary = controller.stats(Some(civic), 4, at("2024-02-01T00:00:00Z")).await.unwrap();
        assert_eq!(summary.vehicle_count, 2);
        assert_eq!(summary.trip_count, 1);
        assert_eq!(summary.total_distance, 42.0);
        assert_eq!(summary.this_month_trip_count, 0);
        assert_eq!(summary.selected_vehicle_id, Some(civic));
    }

    #[tokio::test]
    async fn test_stats_unknown_vehicle() {
        let (controller, _) = controller();
        let result = controller.stats(Some(Uuid::new_v4()), 4, Utc::now()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_selected_vehicle() {
        let (controller, db) = controller();
        let civic = db.read().await.vehicles[1].clone();

        let vehicle = controller.selected_vehicle(civic.id).await.unwrap();
        assert_eq!(vehicle.license_plate, civic.license_plate);

        let missing = controller.selected_vehicle(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recent_activity_limit() {
        let (controller, _) = controller();
        let feed = controller.recent_activity(None, 2, at("2024-01-16T09:00:00Z")).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert!(feed[0].timestamp >= feed[1].timestamp);
    }
}
