//! Modelos de centros de servicio

use serde::{Deserialize, Serialize};

use super::catalog::Region;

/// Nivel cualitativo de carga de un centro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Utilization {
    Low,
    Medium,
    High,
}

impl Utilization {
    pub const ALL: [Utilization; 3] = [Utilization::Low, Utilization::Medium, Utilization::High];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenter {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub vehicles_covered: u32,
    pub active_issues: u32,
    pub upcoming_appointments: u32,
    pub utilization: Utilization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelServiceCount {
    pub model_name: String,
    pub count: u32,
}

/// Detalle de un centro de servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenterDetail {
    pub id: String,
    pub name: String,
    pub location: String,
    pub region: Region,
    pub current_load: u32,  // %
    pub upcoming_load: u32, // %
    pub common_issues: Vec<String>,
    pub models_serviced: Vec<ModelServiceCount>,
}

impl ServiceCenterDetail {
    pub fn total_serviced(&self) -> u32 {
        self.models_serviced.iter().map(|m| m.count).sum()
    }

    /// Porcentaje de cada modelo sobre el total atendido
    pub fn model_shares(&self) -> Vec<(String, f64)> {
        let total = self.total_serviced();
        self.models_serviced
            .iter()
            .map(|m| {
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(m.count) * 100.0 / f64::from(total)
                };
                (m.model_name.clone(), share)
            })
            .collect()
    }
}
