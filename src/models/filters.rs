//! Filtros aceptados por las consultas del dashboard

use serde::{Deserialize, Serialize};

use super::catalog::Region;

/// Ventana temporal de una consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
}

/// Filtro de región; `All` equivale a no filtrar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionFilter {
    All,
    North,
    South,
    East,
    West,
}

impl RegionFilter {
    pub fn region(&self) -> Option<Region> {
        match self {
            RegionFilter::All => None,
            RegionFilter::North => Some(Region::North),
            RegionFilter::South => Some(Region::South),
            RegionFilter::East => Some(Region::East),
            RegionFilter::West => Some(Region::West),
        }
    }
}
