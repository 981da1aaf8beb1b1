//! Modelos del resumen de flota
//!
//! KPIs globales, resumen por modelo y resumen por región.

use serde::{Deserialize, Serialize};

use super::catalog::Region;

/// Dirección reciente de la tasa de incidencias de un modelo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Increasing, Trend::Decreasing, Trend::Stable];
}

/// Resumen de un modelo dentro de la flota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub model_id: String,
    pub model_name: String,
    pub vehicles: u32,
    pub active_issues: u32,
    pub failure_rate: f64, // 0–1
    pub trend: Trend,
}

/// Resumen de una región
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalSummary {
    pub region: Region,
    pub vehicles: u32,
    pub active_issues: u32,
    pub upcoming_appointments: u32,
}

/// Snapshot de KPIs de toda la flota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    pub total_vehicles: u32,
    pub vehicles_with_active_issues: u32,
    pub high_severity_cases: u32,
    #[serde(rename = "forecastedServiceDemand7Days")]
    pub forecasted_service_demand_7_days: u32,
    pub model_summary: Vec<ModelSummary>,
    pub regional_summary: Vec<RegionalSummary>,
}
