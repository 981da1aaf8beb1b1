//! Catálogo de referencia
//!
//! Listas estáticas de modelos, regiones, componentes y centros de servicio.
//! Los índices fuera de rango son errores de programación.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Región operativa de la flota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entrada del catálogo de modelos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogModel {
    pub model_id: &'static str,
    pub model_name: &'static str,
}

pub const MODELS: [CatalogModel; 5] = [
    CatalogModel { model_id: "model-x", model_name: "Model X" },
    CatalogModel { model_id: "model-s", model_name: "Model S" },
    CatalogModel { model_id: "model-3", model_name: "Model 3" },
    CatalogModel { model_id: "model-y", model_name: "Model Y" },
    CatalogModel { model_id: "cybertruck", model_name: "Cybertruck" },
];

/// Orden fijo: la asignación de centros usa `índice mod 4` sobre esta lista
pub const REGIONS: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

pub const COMPONENTS: [&str; 8] = [
    "Battery Management System",
    "Brake System",
    "Suspension",
    "Electric Motor",
    "Cooling System",
    "Autopilot Sensors",
    "Charging Port",
    "HVAC System",
];

pub const SERVICE_CENTER_NAMES: [&str; 8] = [
    "Downtown Service Hub",
    "North Plaza Center",
    "Eastside Facility",
    "West End Station",
    "South Bay Center",
    "Central Service Point",
    "Airport Service Center",
    "Industrial District Hub",
];

pub const COMMON_SERVICE_ISSUES: [&str; 5] = [
    "Battery Management System Alerts",
    "Brake Pad Wear",
    "Suspension Adjustment",
    "Software Updates",
    "Tire Rotation",
];

/// Buscar un modelo por id
pub fn find_model(model_id: &str) -> Option<&'static CatalogModel> {
    MODELS.iter().find(|m| m.model_id == model_id)
}

/// Id estable del centro de servicio en la posición `index`
pub fn service_center_id(index: usize) -> String {
    format!("sc-{}", index + 1)
}
