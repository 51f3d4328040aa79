//! Base de datos en memoria
//!
//! Reemplaza al backend REST del cliente móvil: las tablas viven en un
//! `RwLock` compartido y se pierden al reiniciar el proceso.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{FuelEntry, MaintenanceRecord, Trip, Vehicle};

/// Contenido de la base de datos
#[derive(Debug, Default, Clone)]
pub struct Tables {
    pub vehicles: Vec<Vehicle>,
    pub trips: Vec<Trip>,
    pub fuel_entries: Vec<FuelEntry>,
    pub maintenance: Vec<MaintenanceRecord>,
}

impl Tables {
    pub fn vehicle_exists(&self, id: uuid::Uuid) -> bool {
        self.vehicles.iter().any(|vehicle| vehicle.id == id)
    }

    /// Elimina un vehículo y todos sus registros dependientes.
    /// Devuelve `false` si el vehículo no existía.
    pub fn remove_vehicle_cascade(&mut self, id: uuid::Uuid) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|vehicle| vehicle.id != id);
        if self.vehicles.len() == before {
            return false;
        }

        self.trips.retain(|trip| trip.car_id != id);
        self.fuel_entries.retain(|entry| entry.car_id != id);
        self.maintenance.retain(|item| item.car_id != id);
        true
    }
}

/// Handle clonable a las tablas compartidas
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Conteo de registros por tabla, para logs de arranque
    pub async fn counts(&self) -> (usize, usize, usize, usize) {
        let tables = self.read().await;
        (
            tables.vehicles.len(),
            tables.trips.len(),
            tables.fuel_entries.len(),
            tables.maintenance.len(),
        )
    }
}
