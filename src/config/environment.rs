//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Las variables ausentes toman un valor por defecto; las mal formadas son error.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

/// Tamaño por defecto del feed de actividad del dashboard
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 4;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
    pub recent_activity_limit: usize,
    pub seed_demo_data: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: Level::INFO,
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
            seed_demo_data: true,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = get("ENVIRONMENT").unwrap_or(defaults.environment);
        let is_production = environment == "production";

        let log_level = match get("LOG_LEVEL") {
            Some(value) => Level::from_str(&value)
                .map_err(|_| anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error (got '{}')", value))?,
            None => defaults.log_level,
        };

        Ok(Self {
            port: parse_var(&get, "PORT")?.unwrap_or(defaults.port),
            host: get("HOST").unwrap_or(defaults.host),
            cors_origins: get("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level,
            recent_activity_limit: parse_var(&get, "RECENT_ACTIVITY_LIMIT")?
                .unwrap_or(defaults.recent_activity_limit),
            seed_demo_data: parse_var(&get, "SEED_DEMO_DATA")?.unwrap_or(!is_production),
            environment,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|value| {
            value
                .parse::<T>()
                .with_context(|| format!("{} has an invalid value '{}'", key, value))
        })
        .transpose()
}
