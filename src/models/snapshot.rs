//! Snapshot completo de la flota
//!
//! Se genera una vez por "tick" y se comparte mientras no se refresque.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::fleet::FleetOverview;
use super::model_performance::ModelPerformance;
use super::service_center::{ServiceCenter, ServiceCenterDetail};

#[derive(Debug, Clone, PartialEq)]
pub struct FleetSnapshot {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub overview: FleetOverview,
    /// Un informe por modelo del catálogo, en orden de catálogo
    pub model_performance: Vec<ModelPerformance>,
    pub service_centers: Vec<ServiceCenter>,
    /// Un detalle por centro, en el mismo orden que `service_centers`
    pub service_center_details: Vec<ServiceCenterDetail>,
}

/// Metadatos públicos del snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub mode: String,
    pub snapshot_id: Option<Uuid>,
    pub generated_at: Option<DateTime<Utc>>,
    pub hits: u64,
    pub generations: u64,
}
