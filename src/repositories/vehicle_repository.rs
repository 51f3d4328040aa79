use crate::database::MemoryDatabase;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::models::{FuelType, Vehicle};
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use uuid::Uuid;

pub struct VehicleRepository {
    db: MemoryDatabase,
}

impl VehicleRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let mut tables = self.db.write().await;

        // La matrícula es única dentro del almacén
        if tables.vehicles.iter().any(|v| v.has_license_plate(&request.license_plate)) {
            return Err(conflict_error("Car", "license plate", request.license_plate.trim()));
        }

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            year: request.year,
            license_plate: request.license_plate.trim().to_string(),
            mileage: request.mileage.unwrap_or(0),
            fuel_type: request.fuel_type.unwrap_or(FuelType::Gasoline),
        };

        tables.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let tables = self.db.read().await;
        Ok(tables.vehicles.iter().find(|v| v.id == id).cloned())
    }

    pub async fn find_by_license_plate(&self, license_plate: &str) -> Result<Option<Vehicle>, AppError> {
        let tables = self.db.read().await;
        Ok(tables
            .vehicles
            .iter()
            .find(|v| v.has_license_plate(license_plate))
            .cloned())
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let tables = self.db.read().await;
        Ok(tables
            .vehicles
            .iter()
            .filter(|v| filters.matches(v))
            .cloned()
            .collect())
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.db.read().await.vehicle_exists(id))
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        let mut tables = self.db.write().await;

        if let Some(plate) = request.license_plate.as_deref() {
            if tables.vehicles.iter().any(|v| v.id != id && v.has_license_plate(plate)) {
                return Err(conflict_error("Car", "license plate", plate.trim()));
            }
        }

        let vehicle = tables
            .vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        if let Some(make) = request.make {
            vehicle.make = make.trim().to_string();
        }
        if let Some(model) = request.model {
            vehicle.model = model.trim().to_string();
        }
        if let Some(year) = request.year {
            vehicle.year = year;
        }
        if let Some(plate) = request.license_plate {
            vehicle.license_plate = plate.trim().to_string();
        }
        if let Some(mileage) = request.mileage {
            vehicle.mileage = mileage;
        }
        if let Some(fuel_type) = request.fuel_type {
            vehicle.fuel_type = fuel_type;
        }

        Ok(vehicle.clone())
    }

    pub async fn update_mileage(&self, id: Uuid, mileage: u64) -> Result<Vehicle, AppError> {
        self.update(
            id,
            UpdateVehicleRequest {
                mileage: Some(mileage),
                ..Default::default()
            },
        )
        .await
    }

    /// Borra el vehículo junto con sus viajes, repostajes y mantenimientos
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.db.write().await.remove_vehicle_cascade(id) {
            Ok(())
        } else {
            Err(not_found_error("Car", &id.to_string()))
        }
    }
}
