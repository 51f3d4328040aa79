use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use carlog_analytics::build_router;
use carlog_analytics::config::environment::EnvironmentConfig;
use carlog_analytics::database::{seed, MemoryDatabase};
use carlog_analytics::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("invalid environment configuration")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 CarLog Analytics - Vehicle logbook API");
    info!("==========================================");
    info!("🌍 Environment: {}", config.environment);

    // Inicializar almacén en memoria
    let db = if config.seed_demo_data {
        info!("🌱 Loading demo records");
        MemoryDatabase::with_tables(seed::demo_tables())
    } else {
        MemoryDatabase::new()
    };

    let (cars, trips, fuel_entries, maintenance) = db.counts().await;
    info!(
        "✅ Store ready: {} cars, {} trips, {} fuel entries, {} maintenance items",
        cars, trips, fuel_entries, maintenance
    );

    if config.cors_origins.is_empty() && config.is_production() {
        warn!("⚠️ CORS_ORIGINS is empty: any origin is accepted");
    }

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_url()))?;
    let app = build_router(AppState::new(db, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   /api/cars, /api/trips, /api/fuel-entries, /api/maintenance");
    info!("   GET  /api/dashboard/stats, /api/dashboard/recent-activity");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {}", addr))?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
