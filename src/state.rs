//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::{FleetAnalytics, FleetController};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub analytics: Arc<dyn FleetAnalytics>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let analytics = FleetController::from_config(&config).into_shared();
        Self { config, analytics }
    }

    /// Estado con una implementación de analítica arbitraria (tests)
    pub fn with_analytics(config: EnvironmentConfig, analytics: Arc<dyn FleetAnalytics>) -> Self {
        Self { config, analytics }
    }
}
