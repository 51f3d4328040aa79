//! Modelo de FuelEntry
//!
//! Repostajes: litros, precio por litro, costo total y odómetro al repostar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelEntry {
    pub id: Uuid,
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub liters: f64,
    pub cost_per_liter: f64,
    /// Valor desnormalizado, se guarda tal cual llega
    pub total_cost: f64,
    /// Odómetro al momento del repostaje
    pub mileage: u64,
    pub fuel_type: String,
}

/// Request para crear un repostaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuelEntryRequest {
    pub car_id: Uuid,

    pub date: Option<NaiveDate>,

    #[validate(range(min = 0.0))]
    pub liters: f64,

    #[validate(range(min = 0.0))]
    pub cost_per_liter: f64,

    /// Si falta se calcula como litros × precio
    #[validate(range(min = 0.0))]
    pub total_cost: Option<f64>,

    pub mileage: u64,

    #[validate(length(min = 1, max = 30))]
    pub fuel_type: Option<String>,
}

/// Request para actualizar un repostaje
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFuelEntryRequest {
    pub date: Option<NaiveDate>,

    #[validate(range(min = 0.0))]
    pub liters: Option<f64>,

    #[validate(range(min = 0.0))]
    pub cost_per_liter: Option<f64>,

    #[validate(range(min = 0.0))]
    pub total_cost: Option<f64>,

    pub mileage: Option<u64>,

    #[validate(length(min = 1, max = 30))]
    pub fuel_type: Option<String>,
}

impl FuelEntry {
    pub fn title(&self) -> String {
        format!("Fuel refill - ${:.2}", self.total_cost)
    }

    /// Compara el tipo de combustible sin distinguir mayúsculas
    pub fn has_fuel_type(&self, kind: &str) -> bool {
        self.fuel_type.eq_ignore_ascii_case(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_type_match_ignores_case() {
        let entry = FuelEntry {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            liters: 47.3,
            cost_per_liter: 1.5,
            total_cost: 70.95,
            mileage: 45000,
            fuel_type: "Regular".to_string(),
        };

        assert!(entry.has_fuel_type("regular"));
        assert!(entry.has_fuel_type("REGULAR"));
        assert!(!entry.has_fuel_type("Premium"));
        assert_eq!(entry.title(), "Fuel refill - $70.95");
    }
}
