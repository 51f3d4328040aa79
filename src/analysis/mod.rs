//! Motor de métricas del vehículo
//!
//! Funciones puras sobre colecciones ya cargadas en memoria. No hacen I/O ni
//! leen el reloj: el instante "ahora" siempre se inyecta.

pub mod aggregator;
pub mod recency;
pub mod dashboard;
pub mod maintenance;

pub use dashboard::{build_dashboard_summary, DashboardInput};
