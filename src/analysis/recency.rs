//! Feed de actividad reciente
//!
//! Mezcla viajes y repostajes en un único feed ordenado del más reciente al
//! más antiguo, con una etiqueta de tiempo relativo ("2 hours ago").
//! El instante "ahora" siempre llega como parámetro.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::{ActivityItem, ActivityKind, FuelEntry, Trip};

const HOURS_PER_DAY: i64 = 24;
const HOURS_PER_WEEK: i64 = 24 * 7;

/// Instante de un registro con fecha de calendario: medianoche UTC
pub fn event_timestamp(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Etiqueta legible del tiempo transcurrido entre `event` y `now`.
///
/// Los eventos en el futuro se tratan como "Just now".
pub fn relative_label(event: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - event).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < HOURS_PER_DAY {
        format!("{} hours ago", hours)
    } else if hours < 2 * HOURS_PER_DAY {
        "1 day ago".to_string()
    } else if hours < HOURS_PER_WEEK {
        format!("{} days ago", hours / HOURS_PER_DAY)
    } else {
        format!("{} weeks ago", hours / HOURS_PER_DAY / 7)
    }
}

fn activity_item(kind: ActivityKind, record_id: uuid::Uuid, title: String, date: NaiveDate, now: DateTime<Utc>) -> ActivityItem {
    let timestamp = event_timestamp(date);
    ActivityItem {
        kind,
        record_id,
        title,
        timestamp,
        relative_label: relative_label(timestamp, now),
    }
}

/// Feed combinado de viajes y repostajes, truncado a `limit`.
///
/// Con el mismo instante los viajes van antes que los repostajes y se
/// respeta el orden de entrada.
pub fn recent_activity(
    trips: &[Trip],
    fuel_entries: &[FuelEntry],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = trips
        .iter()
        .map(|trip| activity_item(ActivityKind::Trip, trip.id, trip.title(), trip.date, now))
        .chain(fuel_entries.iter().map(|entry| {
            activity_item(ActivityKind::Fuel, entry.id, entry.title(), entry.date, now)
        }))
        .collect();

    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(limit);
    feed
}
