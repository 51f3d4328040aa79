//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::MemoryDatabase;
use crate::repositories::RecordSource;

#[derive(Clone)]
pub struct AppState {
    pub db: MemoryDatabase,
    pub records: Arc<dyn RecordSource>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(db: MemoryDatabase, config: EnvironmentConfig) -> Self {
        Self {
            records: Arc::new(db.clone()),
            db,
            config,
        }
    }
}
