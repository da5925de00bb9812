//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto salvo `DATABASE_URL` y `CATALOG_PATH`, que
//! son opcionales.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Ajustes del trigger HTTP gestionado por la plataforma
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSettings {
    pub region: String,
    pub max_instances: u32,
    pub memory_mib: u32,
    pub timeout_secs: u64,
}

impl Default for FunctionSettings {
    fn default() -> Self {
        Self {
            region: "europe-west1".to_string(),
            max_instances: 10,
            memory_mib: 512,
            timeout_secs: 60,
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
    pub catalog_path: Option<PathBuf>,
    pub function: FunctionSettings,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            cors_origins: Vec::new(),
            log_level: Level::INFO,
            catalog_path: None,
            function: FunctionSettings::default(),
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var).filter(|v| !v.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Leer la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let function_defaults = FunctionSettings::default();
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        Ok(Self {
            environment: non_empty("ENVIRONMENT").unwrap_or(defaults.environment),
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            database_url: non_empty("DATABASE_URL"),
            cors_origins: non_empty("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: parse_var(&lookup, "LOG_LEVEL", defaults.log_level)?,
            catalog_path: non_empty("CATALOG_PATH").map(PathBuf::from),
            function: FunctionSettings {
                region: non_empty("FUNCTION_REGION").unwrap_or(function_defaults.region),
                max_instances: parse_var(
                    &lookup,
                    "FUNCTION_MAX_INSTANCES",
                    function_defaults.max_instances,
                )?,
                memory_mib: parse_var(&lookup, "FUNCTION_MEMORY_MIB", function_defaults.memory_mib)?,
                timeout_secs: parse_var(
                    &lookup,
                    "FUNCTION_TIMEOUT_SECS",
                    function_defaults.timeout_secs,
                )?,
            },
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
