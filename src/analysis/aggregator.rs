//! Agregador de métricas del vehículo
//!
//! Funciones puras sobre colecciones de registros: totales, promedios,
//! series mensuales y serie de eficiencia de combustible. Nunca mutan la
//! entrada ni leen el reloj del sistema.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::models::{
    EfficiencyAnomaly, EfficiencyAnomalyKind, EfficiencyReport, FuelEfficiencyPoint, FuelEntry,
    FuelSummary, MonthlyBucket, Trip, TripStatistics,
};

/// Número máximo de buckets que devuelve una serie mensual
pub const MONTHLY_WINDOW: usize = 6;

// fold desde 0.0: `Sum` para f64 parte de -0.0 y una colección vacía
// terminaría serializada como "-0.0"
fn sum_by<T>(records: &[T], value_of: impl Fn(&T) -> f64) -> f64 {
    records.iter().fold(0.0, |acc, record| acc + value_of(record))
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Distancia total recorrida (km)
pub fn total_distance(trips: &[Trip]) -> f64 {
    sum_by(trips, |trip| trip.distance)
}

/// Costo total de combustible
pub fn total_fuel_cost(entries: &[FuelEntry]) -> f64 {
    sum_by(entries, |entry| entry.total_cost)
}

/// Litros totales repostados
pub fn total_fuel_volume(entries: &[FuelEntry]) -> f64 {
    sum_by(entries, |entry| entry.liters)
}

/// Precio medio por litro. 0 cuando no hay volumen.
pub fn average_unit_cost(entries: &[FuelEntry]) -> f64 {
    ratio_or_zero(total_fuel_cost(entries), total_fuel_volume(entries))
}

pub fn fuel_summary(entries: &[FuelEntry]) -> FuelSummary {
    FuelSummary {
        entry_count: entries.len(),
        total_cost: total_fuel_cost(entries),
        total_volume: total_fuel_volume(entries),
        average_unit_cost: average_unit_cost(entries),
    }
}

/// Estadísticas de viajes; los promedios valen 0 sin viajes
pub fn trip_statistics(trips: &[Trip]) -> TripStatistics {
    let trip_count = trips.len();
    let total_distance = total_distance(trips);
    let total_duration: u64 = trips.iter().map(|trip| u64::from(trip.duration)).sum();

    TripStatistics {
        trip_count,
        total_distance,
        average_distance: ratio_or_zero(total_distance, trip_count as f64),
        total_duration,
        average_duration: ratio_or_zero(total_duration as f64, trip_count as f64),
    }
}

/// Agrupa por año-mes y devuelve los últimos `MONTHLY_WINDOW` buckets en
/// orden ascendente.
pub fn monthly_bucket_series<T, D, V>(records: &[T], date_of: D, value_of: V) -> Vec<MonthlyBucket>
where
    D: Fn(&T) -> NaiveDate,
    V: Fn(&T) -> f64,
{
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in records {
        let date = date_of(record);
        *buckets.entry((date.year(), date.month())).or_insert(0.0) += value_of(record);
    }

    let skip = buckets.len().saturating_sub(MONTHLY_WINDOW);
    buckets
        .into_iter()
        .skip(skip)
        .map(|((year, month), total)| MonthlyBucket {
            year_month: format!("{:04}-{:02}", year, month),
            total,
        })
        .collect()
}

/// Distancia por mes
pub fn monthly_distance(trips: &[Trip]) -> Vec<MonthlyBucket> {
    monthly_bucket_series(trips, |trip| trip.date, |trip| trip.distance)
}

/// Costo de combustible por mes
pub fn monthly_fuel_cost(entries: &[FuelEntry]) -> Vec<MonthlyBucket> {
    monthly_bucket_series(entries, |entry| entry.date, |entry| entry.total_cost)
}

/// `current - previous` con signo, saturado al rango de `i64`
fn signed_delta(previous: u64, current: u64) -> i64 {
    let delta = i128::from(current) - i128::from(previous);
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}

/// Serie de eficiencia (km/L) entre repostajes consecutivos del mismo vehículo.
///
/// Los pares con odómetro decreciente o repetido, o con volumen no positivo,
/// no producen punto; aparecen en `anomalies`.
pub fn fuel_efficiency_report(entries: &[FuelEntry]) -> EfficiencyReport {
    let mut by_vehicle: BTreeMap<Uuid, Vec<&FuelEntry>> = BTreeMap::new();
    for entry in entries {
        by_vehicle.entry(entry.car_id).or_default().push(entry);
    }

    let mut report = EfficiencyReport::default();

    for (car_id, mut fills) in by_vehicle {
        fills.sort_by(|a, b| a.date.cmp(&b.date).then(a.mileage.cmp(&b.mileage)));

        for pair in fills.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let odometer_delta = signed_delta(previous.mileage, current.mileage);

            let anomaly = match current.mileage.cmp(&previous.mileage) {
                Ordering::Less => Some(EfficiencyAnomalyKind::OdometerDecreased),
                Ordering::Equal => Some(EfficiencyAnomalyKind::OdometerUnchanged),
                Ordering::Greater if current.liters <= 0.0 || current.liters.is_nan() => {
                    Some(EfficiencyAnomalyKind::NonPositiveVolume)
                }
                Ordering::Greater => None,
            };

            match anomaly {
                Some(kind) => report.anomalies.push(EfficiencyAnomaly {
                    car_id,
                    entry_id: current.id,
                    previous_entry_id: previous.id,
                    date: current.date,
                    kind,
                    odometer_delta,
                }),
                None => {
                    let distance_delta = (current.mileage - previous.mileage) as f64;
                    report.points.push(FuelEfficiencyPoint {
                        car_id,
                        date: current.date,
                        efficiency: distance_delta / current.liters,
                        distance_delta,
                        volume_used: current.liters,
                    });
                }
            }
        }
    }

    report.points.sort_by(|a, b| a.date.cmp(&b.date));
    report.anomalies.sort_by(|a, b| a.date.cmp(&b.date));
    report
}

/// Solo los puntos válidos de `fuel_efficiency_report`
pub fn fuel_efficiency_series(entries: &[FuelEntry]) -> Vec<FuelEfficiencyPoint> {
    fuel_efficiency_report(entries).points
}

/// Media de la eficiencia de los pares válidos; 0 si no hay ninguno
pub fn average_efficiency(entries: &[FuelEntry]) -> f64 {
    let points = fuel_efficiency_series(entries);
    ratio_or_zero(sum_by(&points, |p| p.efficiency), points.len() as f64)
}
