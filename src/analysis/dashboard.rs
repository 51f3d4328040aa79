//! Constructor del resumen del dashboard
//!
//! Compone el agregador y el feed de actividad en el objeto que la capa de
//! presentación pinta en una sola llamada.

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use crate::analysis::{aggregator, recency};
use crate::models::{DashboardSummary, FuelEntry, Trip, Vehicle};

/// Entrada del dashboard: colecciones completas, vehículo seleccionado
/// opcional, "ahora" inyectado y tamaño del feed.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInput<'a> {
    pub vehicles: &'a [Vehicle],
    pub trips: &'a [Trip],
    pub fuel_entries: &'a [FuelEntry],
    pub selected_vehicle: Option<Uuid>,
    pub now: DateTime<Utc>,
    pub activity_limit: usize,
}

/// Viajes cuyo mes de calendario coincide con el de `now` (no es una
/// ventana móvil de 30 días)
pub fn this_month_trip_count(trips: &[Trip], now: DateTime<Utc>) -> usize {
    let today = now.date_naive();
    trips
        .iter()
        .filter(|trip| trip.date.year() == today.year() && trip.date.month() == today.month())
        .count()
}

pub fn build_dashboard_summary(input: DashboardInput<'_>) -> DashboardSummary {
    let (trips, fuel_entries): (Vec<Trip>, Vec<FuelEntry>) = match input.selected_vehicle {
        Some(car_id) => (
            input.trips.iter().filter(|t| t.car_id == car_id).cloned().collect(),
            input.fuel_entries.iter().filter(|f| f.car_id == car_id).cloned().collect(),
        ),
        None => (input.trips.to_vec(), input.fuel_entries.to_vec()),
    };

    DashboardSummary {
        selected_vehicle_id: input.selected_vehicle,
        vehicle_count: input.vehicles.len(),
        trip_count: trips.len(),
        total_distance: aggregator::total_distance(&trips),
        total_fuel_cost: aggregator::total_fuel_cost(&fuel_entries),
        average_efficiency: aggregator::average_efficiency(&fuel_entries),
        this_month_trip_count: this_month_trip_count(&trips, input.now),
        recent_activity: recency::recent_activity(&trips, &fuel_entries, input.now, input.activity_limit),
        generated_at: input.now,
    }
}
