//! Modelos del informe de rendimiento por modelo

use serde::{Deserialize, Serialize};

use super::catalog::Region;

/// Reparto porcentual de severidad; siempre suma 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SeverityDistribution {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl SeverityDistribution {
    /// Construir el reparto a partir de las cuotas alta y media.
    ///
    /// `low` es el resto hasta 100. Si `high + medium` supera 100 se recorta
    /// `medium` (y después `high`) para que ninguna cuota sea negativa.
    pub fn from_shares(high: u32, medium: u32) -> Self {
        let high = high.min(100);
        let medium = medium.min(100 - high);
        Self {
            low: 100 - high - medium,
            medium,
            high,
        }
    }

    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBreakdown {
    pub component: String,
    pub incidents: u32,
    pub failure_percentage: f64, // 0–100
    pub severity_distribution: SeverityDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBreakdown {
    pub region: Region,
    pub vehicles: u32,
    pub issues: u32,
    pub high_severity: u32,
}

/// Informe detallado de un modelo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPerformance {
    pub model_id: String,
    pub model_name: String,
    pub total_vehicles: u32,
    pub active_issues: u32,
    pub failure_rate: f64,
    pub high_severity_count: u32,
    pub component_breakdown: Vec<ComponentBreakdown>,
    pub regional_breakdown: Vec<RegionalBreakdown>,
}
