//! Modelos del sistema
//!
//! Este módulo contiene los registros del logbook (vehículos, viajes,
//! repostajes, mantenimiento) y los resultados del motor de métricas.

pub mod vehicle;
pub mod trip;
pub mod fuel_entry;
pub mod maintenance;
pub mod analytics;

pub use analytics::*;
pub use fuel_entry::FuelEntry;
pub use maintenance::{MaintenanceRecord, MaintenanceStatus, ServiceType};
pub use trip::Trip;
pub use vehicle::{FuelType, Vehicle};
