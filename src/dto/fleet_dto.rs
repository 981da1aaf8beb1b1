use serde::{Deserialize, Serialize};

use crate::models::filters::{RegionFilter, TimeRange};

// Query params de overview y listado de modelos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetQueryParams {
    pub time_range: Option<TimeRange>,
    pub region: Option<RegionFilter>,
}

// Query params del listado de centros de servicio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceCentersQueryParams {
    pub region: Option<RegionFilter>,
}

// Respuesta del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}
