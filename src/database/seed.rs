//! Datos de demostración
//!
//! Los mismos registros de ejemplo que mostraba la app móvil, en km y litros.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::memory::Tables;
use crate::models::{
    FuelEntry, FuelType, MaintenanceRecord, MaintenanceStatus, ServiceType, Trip, Vehicle,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn vehicle(make: &str, model: &str, year: i32, plate: &str, mileage: u64) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        license_plate: plate.to_string(),
        mileage,
        fuel_type: FuelType::Gasoline,
    }
}

fn trip(car_id: Uuid, day: NaiveDate, from: &str, to: &str, distance: f64, duration: u32) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        car_id,
        date: day,
        start_location: from.to_string(),
        end_location: to.to_string(),
        distance,
        duration,
    }
}

fn fill(car_id: Uuid, day: NaiveDate, liters: f64, cost_per_liter: f64, total_cost: f64, mileage: u64) -> FuelEntry {
    FuelEntry {
        id: Uuid::new_v4(),
        car_id,
        date: day,
        liters,
        cost_per_liter,
        total_cost,
        mileage,
        fuel_type: "Regular".to_string(),
    }
}

pub fn demo_tables() -> Tables {
    let camry = vehicle("Toyota", "Camry", 2020, "ABC-123", 45000);
    let civic = vehicle("Honda", "Civic", 2019, "XYZ-789", 32000);

    let trips = vec![
        trip(camry.id, date(2024, 1, 15), "Home", "Work", 20.1, 25),
        trip(camry.id, date(2024, 1, 14), "Work", "Grocery Store", 13.2, 18),
        trip(civic.id, date(2024, 1, 10), "Home", "Airport", 42.0, 40),
    ];

    let fuel_entries = vec![
        fill(camry.id, date(2024, 1, 15), 47.3, 0.86, 40.63, 45000),
        fill(camry.id, date(2024, 1, 8), 44.7, 0.83, 37.17, 44800),
        fill(civic.id, date(2024, 1, 5), 38.0, 0.85, 32.30, 31650),
    ];

    let maintenance = vec![
        MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: camry.id,
            title: "Oil Change".to_string(),
            description: "Synthetic oil change and filter replacement".to_string(),
            date: date(2024, 1, 10),
            mileage: 45000,
            cost: 45.0,
            status: MaintenanceStatus::Completed,
            service_type: ServiceType::OilChange,
            next_due_mileage: Some(48000),
            next_due_date: Some(date(2024, 3, 15)),
        },
        MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: camry.id,
            title: "Tire Rotation".to_string(),
            description: "Rotate tires and balance wheels".to_string(),
            date: date(2024, 1, 5),
            mileage: 44800,
            cost: 35.0,
            status: MaintenanceStatus::Completed,
            service_type: ServiceType::TireRotation,
            next_due_mileage: Some(47800),
            next_due_date: Some(date(2024, 3, 10)),
        },
        MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: camry.id,
            title: "Brake Inspection".to_string(),
            description: "Check brake pads and rotors".to_string(),
            date: date(2024, 2, 20),
            mileage: 47000,
            cost: 0.0,
            status: MaintenanceStatus::Scheduled,
            service_type: ServiceType::BrakeService,
            next_due_mileage: None,
            next_due_date: None,
        },
    ];

    Tables {
        vehicles: vec![camry, civic],
        trips,
        fuel_entries,
        maintenance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_records_reference_existing_vehicles() {
        let tables = demo_tables();
        assert_eq!(tables.vehicles.len(), 2);
        assert!(tables.trips.iter().all(|t| tables.vehicle_exists(t.car_id)));
        assert!(tables.fuel_entries.iter().all(|f| tables.vehicle_exists(f.car_id)));
        assert!(tables.maintenance.iter().all(|m| tables.vehicle_exists(m.car_id)));
    }
}
