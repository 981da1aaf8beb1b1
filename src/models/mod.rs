//! Modelos de datos
//!
//! Objetos de valor inmutables que componen el snapshot de la flota
//! y el contrato del asistente conversacional.

pub mod catalog;
pub mod chat;
pub mod filters;
pub mod fleet;
pub mod model_performance;
pub mod service_center;
pub mod snapshot;

pub use catalog::Region;
pub use chat::{ChatContext, ChatReply, ChatRequest, ChatRole, ChatTurn};
pub use filters::{RegionFilter, TimeRange};
pub use fleet::{FleetOverview, ModelSummary, RegionalSummary, Trend};
pub use model_performance::{ComponentBreakdown, ModelPerformance, RegionalBreakdown, SeverityDistribution};
pub use service_center::{ModelServiceCount, ServiceCenter, ServiceCenterDetail, Utilization};
pub use snapshot::{FleetSnapshot, SnapshotInfo};
