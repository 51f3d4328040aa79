//! Análisis de mantenimiento
//!
//! Conteos por estado, costo de lo completado y detección de servicios
//! vencidos por fecha o por kilometraje.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{MaintenanceRecord, MaintenanceStatus, MaintenanceSummary, Vehicle};

/// Un servicio completado nunca está vencido. El resto lo está si su estado
/// ya es `overdue`, si pasó la fecha prevista o si el odómetro alcanzó el
/// kilometraje previsto.
pub fn is_overdue(item: &MaintenanceRecord, vehicle_odometer: Option<u64>, today: NaiveDate) -> bool {
    match item.status {
        MaintenanceStatus::Completed => false,
        MaintenanceStatus::Overdue => true,
        MaintenanceStatus::Scheduled => {
            let date_passed = item.next_due_date.is_some_and(|due| due < today);
            let mileage_reached = matches!(
                (item.next_due_mileage, vehicle_odometer),
                (Some(due), Some(odometer)) if odometer >= due
            );
            date_passed || mileage_reached
        }
    }
}

/// Mantenimientos vencidos, ordenados por fecha ascendente
pub fn overdue_items<'a>(
    items: &'a [MaintenanceRecord],
    vehicles: &[Vehicle],
    today: NaiveDate,
) -> Vec<&'a MaintenanceRecord> {
    let odometers: HashMap<Uuid, u64> = vehicles.iter().map(|v| (v.id, v.mileage)).collect();

    let mut overdue: Vec<&MaintenanceRecord> = items
        .iter()
        .filter(|item| is_overdue(item, odometers.get(&item.car_id).copied(), today))
        .collect();
    overdue.sort_by(|a, b| a.date.cmp(&b.date));
    overdue
}

pub fn maintenance_summary(items: &[MaintenanceRecord]) -> MaintenanceSummary {
    items.iter().fold(MaintenanceSummary::default(), |mut summary, item| {
        match item.status {
            MaintenanceStatus::Completed => {
                summary.completed_count += 1;
                summary.completed_cost += item.cost;
            }
            MaintenanceStatus::Scheduled => summary.scheduled_count += 1,
            MaintenanceStatus::Overdue => summary.overdue_count += 1,
        }
        summary
    })
}
