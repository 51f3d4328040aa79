use crate::database::MemoryDatabase;
use crate::dto::response_dto::{ApiResponse, ExistsResponse};
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{into_app_error, validate_not_empty};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(db: MemoryDatabase) -> Self {
        Self {
            repository: VehicleRepository::new(db),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;
        into_app_error("make", validate_not_empty(&request.make))?;
        into_app_error("model", validate_not_empty(&request.model))?;
        into_app_error("licensePlate", validate_not_empty(&request.license_plate))?;

        let vehicle = self.repository.create(request).await?;
        info!("🚗 Car created: {} {} ({})", vehicle.make, vehicle.model, vehicle.license_plate);

        Ok(ApiResponse::success_with_message(vehicle, "Car created successfully"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))
    }

    pub async fn get_by_license_plate(&self, license_plate: &str) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_license_plate(license_plate)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with license plate '{}' not found", license_plate)))
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list(filters).await
    }

    pub async fn exists(&self, id: Uuid) -> Result<ExistsResponse, AppError> {
        Ok(ExistsResponse {
            exists: self.repository.exists(id).await?,
        })
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;
        if let Some(plate) = request.license_plate.as_deref() {
            into_app_error("licensePlate", validate_not_empty(plate))?;
        }

        let vehicle = self.repository.update(id, request).await?;
        info!("✏️ Car {} updated", vehicle.id);

        Ok(ApiResponse::success_with_message(vehicle, "Car updated successfully"))
    }

    pub async fn update_mileage(&self, id: Uuid, mileage: u64) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self.repository.update_mileage(id, mileage).await?;
        info!("🛣️ Car {} mileage set to {} km", vehicle.id, vehicle.mileage);

        Ok(ApiResponse::success_with_message(vehicle, "Mileage updated successfully"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        info!("🗑️ Car {} deleted with its records", id);

        Ok(ApiResponse::message_only("Car deleted successfully"))
    }
}
