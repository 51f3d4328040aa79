use crate::analysis::aggregator;
use crate::database::MemoryDatabase;
use crate::dto::response_dto::ApiResponse;
use crate::models::fuel_entry::{CreateFuelEntryRequest, UpdateFuelEntryRequest};
use crate::models::{EfficiencyReport, FuelEntry, FuelSummary, MonthlyBucket};
use crate::repositories::{FuelRepository, RecordFilter};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{into_app_error, validate_non_negative, validate_positive};
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

pub struct FuelController {
    repository: FuelRepository,
}

impl FuelController {
    pub fn new(db: MemoryDatabase) -> Self {
        Self {
            repository: FuelRepository::new(db),
        }
    }

    pub async fn create(&self, request: CreateFuelEntryRequest, today: NaiveDate) -> Result<ApiResponse<FuelEntry>, AppError> {
        request.validate()?;
        into_app_error("liters", validate_positive(request.liters))?;
        into_app_error("costPerLiter", validate_non_negative(request.cost_per_liter))?;
        if let Some(total_cost) = request.total_cost {
            into_app_error("totalCost", validate_non_negative(total_cost))?;
        }

        let entry = self.repository.create(request, today).await?;
        info!("⛽ Fuel entry created: {} L for ${:.2}", entry.liters, entry.total_cost);

        Ok(ApiResponse::success_with_message(entry, "Fuel entry created successfully"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<FuelEntry, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fuel entry", &id.to_string()))
    }

    pub async fn list(&self, filter: &RecordFilter, fuel_type: Option<&str>) -> Result<Vec<FuelEntry>, AppError> {
        let mut entries = self.repository.list(filter).await?;
        if let Some(kind) = fuel_type {
            entries.retain(|entry| entry.has_fuel_type(kind));
        }
        Ok(entries)
    }

    pub async fn update(&self, id: Uuid, request: UpdateFuelEntryRequest) -> Result<ApiResponse<FuelEntry>, AppError> {
        request.validate()?;
        if let Some(liters) = request.liters {
            into_app_error("liters", validate_positive(liters))?;
        }

        let entry = self.repository.update(id, request).await?;
        info!("✏️ Fuel entry {} updated", entry.id);

        Ok(ApiResponse::success_with_message(entry, "Fuel entry updated successfully"))
    }

    pub async fn update_cost(&self, id: Uuid, total_cost: f64) -> Result<ApiResponse<FuelEntry>, AppError> {
        into_app_error("newCost", validate_non_negative(total_cost))?;
        let entry = self.repository.update_cost(id, total_cost).await?;

        Ok(ApiResponse::success_with_message(entry, "Cost updated successfully"))
    }

    pub async fn update_liters(&self, id: Uuid, liters: f64) -> Result<ApiResponse<FuelEntry>, AppError> {
        into_app_error("newLiters", validate_positive(liters))?;
        let entry = self.repository.update_liters(id, liters).await?;

        Ok(ApiResponse::success_with_message(entry, "Liters updated successfully"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Fuel entry {} deleted", id);

        Ok(ApiResponse::message_only("Fuel entry deleted successfully"))
    }

    pub async fn summary(&self, filter: &RecordFilter) -> Result<FuelSummary, AppError> {
        let entries = self.repository.list(filter).await?;
        Ok(aggregator::fuel_summary(&entries))
    }

    pub async fn efficiency(&self, filter: &RecordFilter) -> Result<EfficiencyReport, AppError> {
        let entries = self.repository.list(filter).await?;
        let report = aggregator::fuel_efficiency_report(&entries);

        debug!("📈 Efficiency: {} points from {} entries", report.points.len(), entries.len());
        if !report.anomalies.is_empty() {
            warn!("⚠️ {} fuel entry pairs excluded from efficiency", report.anomalies.len());
        }

        Ok(report)
    }

    pub async fn monthly_costs(&self, filter: &RecordFilter) -> Result<Vec<MonthlyBucket>, AppError> {
        let entries = self.repository.list(filter).await?;
        Ok(aggregator::monthly_fuel_cost(&entries))
    }
}
