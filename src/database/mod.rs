//! Módulo de base de datos
//!
//! Almacén en memoria de los registros del logbook y datos de demostración.

pub mod memory;
pub mod seed;

pub use memory::{MemoryDatabase, Tables};
