//! Modelo de Maintenance
//!
//! Registros de mantenimiento con estado y tipo de servicio.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::repositories::RecordFilter;

/// Estado del mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    Completed,
    Overdue,
}

/// Tipo de servicio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    OilChange,
    TireRotation,
    BrakeService,
    Inspection,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub car_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Odómetro al momento del servicio
    pub mileage: u64,
    pub cost: f64,
    pub status: MaintenanceStatus,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_mileage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<NaiveDate>,
}

/// Request para crear un registro de mantenimiento
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub car_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    pub date: Option<NaiveDate>,

    pub mileage: u64,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    #[serde(rename = "type")]
    pub service_type: Option<ServiceType>,

    pub next_due_mileage: Option<u64>,

    pub next_due_date: Option<NaiveDate>,
}

/// Request para actualizar un registro de mantenimiento
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    pub mileage: Option<u64>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    pub status: Option<MaintenanceStatus>,

    #[serde(rename = "type")]
    pub service_type: Option<ServiceType>,

    pub next_due_mileage: Option<u64>,

    pub next_due_date: Option<NaiveDate>,
}

/// Filtros para listar mantenimiento: vehículo y fechas vía `RecordFilter`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceFilters {
    pub record: RecordFilter,
    pub status: Option<MaintenanceStatus>,
    pub service_type: Option<ServiceType>,
}

impl MaintenanceFilters {
    pub fn for_vehicle(car_id: Option<Uuid>) -> Self {
        Self {
            record: RecordFilter::for_vehicle(car_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, item: &MaintenanceRecord) -> bool {
        self.record.matches(item.car_id, item.date)
            && self.status.map_or(true, |status| item.status == status)
            && self.service_type.map_or(true, |kind| item.service_type == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_type_wire_format() {
        assert_eq!(
            serde_json::from_str::<MaintenanceStatus>("\"completed\"").unwrap(),
            MaintenanceStatus::Completed
        );
        assert_eq!(
            serde_json::from_str::<ServiceType>("\"tire_rotation\"").unwrap(),
            ServiceType::TireRotation
        );
        assert!(serde_json::from_str::<ServiceType>("\"repainting\"").is_err());
    }

    #[test]
    fn test_service_type_serialized_as_type() {
        let item = MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            title: "Oil Change".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            mileage: 45000,
            cost: 45.0,
            status: MaintenanceStatus::Completed,
            service_type: ServiceType::OilChange,
            next_due_mileage: None,
            next_due_date: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "oil_change");
        assert_eq!(json["status"], "completed");
        assert!(json.get("nextDueDate").is_none());
    }

    #[test]
    fn test_filters_by_date_range() {
        let mut item = MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            title: "Brake Inspection".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            mileage: 46000,
            cost: 0.0,
            status: MaintenanceStatus::Scheduled,
            service_type: ServiceType::BrakeService,
            next_due_mileage: None,
            next_due_date: None,
        };
        let february = MaintenanceFilters {
            record: RecordFilter {
                car_id: Some(item.car_id),
                start_date: NaiveDate::from_ymd_opt(2024, 2, 1),
                end_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            },
            status: Some(MaintenanceStatus::Scheduled),
            service_type: None,
        };
        assert!(february.matches(&item));

        item.date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(!february.matches(&item));
        assert!(MaintenanceFilters::for_vehicle(Some(item.car_id)).matches(&item));
    }
}
