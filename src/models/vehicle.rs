//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! En la API se expone como `car`, igual que en el cliente móvil.

use serde::{Deserialize, Serialize};
use validator::Validate;
use uuid::Uuid;

/// Tipo de combustible del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Other,
}

/// Vehicle principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    /// Odómetro actual en km
    pub mileage: u64,
    pub fuel_type: FuelType,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(length(min = 2, max = 20))]
    pub license_plate: String,

    pub mileage: Option<u64>,

    pub fuel_type: Option<FuelType>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(min = 2, max = 20))]
    pub license_plate: Option<String>,

    pub mileage: Option<u64>,

    pub fuel_type: Option<FuelType>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFilters {
    pub make: Option<String>,
    pub fuel_type: Option<FuelType>,
}

impl VehicleFilters {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.make
            .as_deref()
            .map_or(true, |make| vehicle.make.eq_ignore_ascii_case(make.trim()))
            && self.fuel_type.map_or(true, |fuel| vehicle.fuel_type == fuel)
    }
}

impl Vehicle {
    /// Compara matrículas ignorando mayúsculas y espacios
    pub fn has_license_plate(&self, license_plate: &str) -> bool {
        self.license_plate.trim().eq_ignore_ascii_case(license_plate.trim())
    }
}
