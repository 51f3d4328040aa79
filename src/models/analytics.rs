//! Modelos de Analytics
//!
//! Este módulo contiene los resultados calculados por el motor de métricas:
//! estadísticas de viajes, series mensuales, eficiencia de combustible,
//! feed de actividad y el resumen del dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estadísticas agregadas de viajes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStatistics {
    pub trip_count: usize,
    pub total_distance: f64,
    pub average_distance: f64,
    /// Minutos
    pub total_duration: u64,
    pub average_duration: f64,
}

/// Totales de combustible
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelSummary {
    pub entry_count: usize,
    pub total_cost: f64,
    pub total_volume: f64,
    pub average_unit_cost: f64,
}

/// Un bucket mensual (`YYYY-MM`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    pub year_month: String,
    pub total: f64,
}

/// Punto de la serie de eficiencia (km/L entre dos repostajes consecutivos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEfficiencyPoint {
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub efficiency: f64,
    pub distance_delta: f64,
    pub volume_used: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyAnomalyKind {
    OdometerDecreased,
    OdometerUnchanged,
    NonPositiveVolume,
}

/// Par de repostajes excluido de la serie de eficiencia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyAnomaly {
    pub car_id: Uuid,
    pub entry_id: Uuid,
    pub previous_entry_id: Uuid,
    pub date: NaiveDate,
    pub kind: EfficiencyAnomalyKind,
    pub odometer_delta: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyReport {
    pub points: Vec<FuelEfficiencyPoint>,
    pub anomalies: Vec<EfficiencyAnomaly>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Trip,
    Fuel,
}

/// Elemento del feed de actividad reciente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub record_id: Uuid,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub relative_label: String,
}

/// Resumen de mantenimiento
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSummary {
    pub completed_count: usize,
    pub scheduled_count: usize,
    pub overdue_count: usize,
    /// Solo suma los mantenimientos completados
    pub completed_cost: f64,
}

/// Resumen para dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub selected_vehicle_id: Option<Uuid>,
    pub vehicle_count: usize,
    pub trip_count: usize,
    pub total_distance: f64,
    pub total_fuel_cost: f64,
    pub average_efficiency: f64,
    pub this_month_trip_count: usize,
    pub recent_activity: Vec<ActivityItem>,
    pub generated_at: DateTime<Utc>,
}
