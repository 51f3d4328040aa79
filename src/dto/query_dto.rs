//! Parámetros de query de la API
//!
//! Los nombres siguen el cliente móvil (`carId`, `startDate`, `newMileage`...).

use serde::Deserialize;
use uuid::Uuid;

use crate::models::maintenance::MaintenanceFilters;
use crate::models::{MaintenanceStatus, ServiceType};
use crate::repositories::RecordFilter;
use crate::utils::errors::AppResult;
use crate::utils::validation::{parse_date_param, validate_date_range};

/// `?carId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarQuery {
    pub car_id: Option<Uuid>,
}

impl CarQuery {
    pub fn filter(&self) -> RecordFilter {
        RecordFilter::for_vehicle(self.car_id)
    }
}

/// `?carId=&startDate=&endDate=` con fechas `YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    pub car_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn record_filter(car_id: Option<Uuid>, start_date: Option<&str>, end_date: Option<&str>) -> AppResult<RecordFilter> {
    let start_date = parse_date_param("startDate", start_date)?;
    let end_date = parse_date_param("endDate", end_date)?;
    validate_date_range(start_date, end_date)?;

    Ok(RecordFilter {
        car_id,
        start_date,
        end_date,
    })
}

impl RecordQuery {
    pub fn to_filter(&self) -> AppResult<RecordFilter> {
        record_filter(self.car_id, self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// Listado de repostajes: `RecordQuery` más `?fuelType=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEntryQuery {
    pub car_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub fuel_type: Option<String>,
}

impl FuelEntryQuery {
    pub fn to_filter(&self) -> AppResult<RecordFilter> {
        record_filter(self.car_id, self.start_date.as_deref(), self.end_date.as_deref())
    }

    /// Tipo pedido sin espacios; vacío equivale a no filtrar
    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref().map(str::trim).filter(|kind| !kind.is_empty())
    }
}

/// `?carId=&status=&type=&startDate=&endDate=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceQuery {
    pub car_id: Option<Uuid>,
    pub status: Option<MaintenanceStatus>,
    #[serde(rename = "type")]
    pub service_type: Option<ServiceType>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl MaintenanceQuery {
    pub fn to_filters(&self) -> AppResult<MaintenanceFilters> {
        Ok(MaintenanceFilters {
            record: record_filter(self.car_id, self.start_date.as_deref(), self.end_date.as_deref())?,
            status: self.status,
            service_type: self.service_type,
        })
    }
}

/// `?carId=&limit=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitQuery {
    pub car_id: Option<Uuid>,
    pub limit: Option<usize>,
}

impl LimitQuery {
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMileageQuery {
    pub new_mileage: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDistanceQuery {
    pub new_distance: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDurationQuery {
    pub new_duration: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCostQuery {
    pub new_cost: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLitersQuery {
    pub new_liters: f64,
}
