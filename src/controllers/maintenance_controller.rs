use crate::analysis::maintenance;
use crate::database::MemoryDatabase;
use crate::dto::response_dto::ApiResponse;
use crate::models::maintenance::{CreateMaintenanceRequest, MaintenanceFilters, UpdateMaintenanceRequest};
use crate::models::vehicle::VehicleFilters;
use crate::models::{MaintenanceRecord, MaintenanceSummary};
use crate::repositories::{MaintenanceRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{into_app_error, validate_non_negative, validate_not_empty};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(db: MemoryDatabase) -> Self {
        Self {
            repository: MaintenanceRepository::new(db.clone()),
            vehicles: VehicleRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
        today: NaiveDate,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        request.validate()?;
        into_app_error("title", validate_not_empty(&request.title))?;
        if let Some(cost) = request.cost {
            into_app_error("cost", validate_non_negative(cost))?;
        }

        let item = self.repository.create(request, today).await?;
        info!("🔧 Maintenance scheduled: {} on {}", item.title, item.date);

        Ok(ApiResponse::success_with_message(item, "Maintenance record created successfully"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MaintenanceRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance item", &id.to_string()))
    }

    pub async fn list(&self, filters: &MaintenanceFilters) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.repository.list(filters).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        request.validate()?;
        if let Some(cost) = request.cost {
            into_app_error("cost", validate_non_negative(cost))?;
        }

        let item = self.repository.update(id, request).await?;
        info!("✏️ Maintenance item {} updated", item.id);

        Ok(ApiResponse::success_with_message(item, "Maintenance record updated successfully"))
    }

    pub async fn mark_completed(&self, id: Uuid) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        let item = self.repository.mark_completed(id).await?;
        info!("✅ Maintenance item {} completed", item.id);

        Ok(ApiResponse::success_with_message(item, "Maintenance marked as completed"))
    }

    pub async fn update_cost(&self, id: Uuid, cost: f64) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        into_app_error("newCost", validate_non_negative(cost))?;
        let item = self.repository.update_cost(id, cost).await?;

        Ok(ApiResponse::success_with_message(item, "Cost updated successfully"))
    }

    pub async fn update_mileage(&self, id: Uuid, mileage: u64) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        let item = self.repository.update_mileage(id, mileage).await?;

        Ok(ApiResponse::success_with_message(item, "Mileage updated successfully"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Maintenance item {} deleted", id);

        Ok(ApiResponse::message_only("Maintenance record deleted successfully"))
    }

    /// Vencidos por estado, fecha o kilometraje del vehículo
    pub async fn overdue(&self, car_id: Option<Uuid>, today: NaiveDate) -> Result<Vec<MaintenanceRecord>, AppError> {
        let filters = MaintenanceFilters::for_vehicle(car_id);
        let items = self.repository.list(&filters).await?;
        let vehicles = self.vehicles.list(&VehicleFilters::default()).await?;

        Ok(maintenance::overdue_items(&items, &vehicles, today)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn summary(&self, car_id: Option<Uuid>) -> Result<MaintenanceSummary, AppError> {
        let filters = MaintenanceFilters::for_vehicle(car_id);
        let items = self.repository.list(&filters).await?;
        Ok(maintenance::maintenance_summary(&items))
    }
}
