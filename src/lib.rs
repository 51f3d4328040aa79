//! CarLog Analytics
//!
//! Backend del logbook de vehículos: almacén de registros en memoria, API
//! HTTP y el motor de métricas (agregados, feed de actividad y dashboard).

pub mod analysis;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Router listo para servir: rutas de la API más CORS, compresión y trazas
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    routes::create_api_router()
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
