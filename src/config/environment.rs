//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errores al leer la configuración
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Política ante ids desconocidos de modelo o centro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Responder `NotFound`
    Strict,
    /// Devolver silenciosamente la primera entrada del catálogo
    FallbackToFirst,
}

impl FromStr for LookupPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(LookupPolicy::Strict),
            "fallback" => Ok(LookupPolicy::FallbackToFirst),
            _ => Err(()),
        }
    }
}

/// Cuándo se vuelven a muestrear los datos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMode {
    /// Cada consulta muestrea valores nuevos
    PerRequest,
    /// Un snapshot compartido hasta el próximo refresh explícito
    Tick,
}

impl SnapshotMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotMode::PerRequest => "per-request",
            SnapshotMode::Tick => "tick",
        }
    }
}

impl FromStr for SnapshotMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-request" => Ok(SnapshotMode::PerRequest),
            "tick" => Ok(SnapshotMode::Tick),
            _ => Err(()),
        }
    }
}

/// Latencias simuladas por operación
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedLatency {
    pub overview: Duration,
    pub models: Duration,
    pub model_performance: Duration,
    pub service_centers: Duration,
    pub service_center_detail: Duration,
    pub chat: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            overview: Duration::from_millis(300),
            models: Duration::from_millis(250),
            model_performance: Duration::from_millis(300),
            service_centers: Duration::from_millis(250),
            service_center_detail: Duration::from_millis(300),
            chat: Duration::from_millis(800),
        }
    }
}

impl SimulatedLatency {
    /// Sin retardo (tests)
    pub fn none() -> Self {
        Self {
            overview: Duration::ZERO,
            models: Duration::ZERO,
            model_performance: Duration::ZERO,
            service_centers: Duration::ZERO,
            service_center_detail: Duration::ZERO,
            chat: Duration::ZERO,
        }
    }

    /// Latencias por defecto multiplicadas por `factor`; `None` si el
    /// factor no es válido o alguna duración no se puede representar
    pub fn scaled(factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return None;
        }

        let scale = |d: Duration| -> Option<Duration> {
            let nanos = (d.as_nanos() as f64 * factor).round();
            if nanos >= u64::MAX as f64 {
                return None;
            }
            Some(Duration::from_nanos(nanos as u64))
        };

        let base = Self::default();
        Some(Self {
            overview: scale(base.overview)?,
            models: scale(base.models)?,
            model_performance: scale(base.model_performance)?,
            service_centers: scale(base.service_centers)?,
            service_center_detail: scale(base.service_center_detail)?,
            chat: scale(base.chat)?,
        })
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub rng_seed: Option<u64>,
    pub lookup_policy: LookupPolicy,
    pub snapshot_mode: SnapshotMode,
    pub latency: SimulatedLatency,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            rng_seed: None,
            lookup_policy: LookupPolicy::Strict,
            snapshot_mode: SnapshotMode::PerRequest,
            latency: SimulatedLatency::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let latency_scale: f64 = parse_var(&lookup, "FLEET_LATENCY_SCALE")?.unwrap_or(1.0);
        let latency = SimulatedLatency::scaled(latency_scale).ok_or_else(|| ConfigError::InvalidValue {
            var: "FLEET_LATENCY_SCALE",
            value: latency_scale.to_string(),
        })?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: parse_var(&lookup, "LOG_LEVEL")?.unwrap_or(defaults.log_level),
            rng_seed: parse_var(&lookup, "FLEET_RNG_SEED")?,
            lookup_policy: parse_var(&lookup, "FLEET_LOOKUP_POLICY")?.unwrap_or(defaults.lookup_policy),
            snapshot_mode: parse_var(&lookup, "FLEET_SNAPSHOT_MODE")?.unwrap_or(defaults.snapshot_mode),
            latency,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
