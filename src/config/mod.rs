//! Configuración del proyecto
//!
//! Variables de entorno del servicio (host, puerto, CORS, nivel de log,
//! tamaño del feed y datos de demostración).

pub mod environment;

pub use environment::*;
