//! Generación del snapshot completo de la flota
//!
//! Usado en modo `tick`: todas las vistas se sirven desde un único
//! snapshot hasta el siguiente refresh.

use chrono::Utc;
use uuid::Uuid;

use crate::config::LookupPolicy;
use crate::models::model_performance::ModelPerformance;
use crate::models::service_center::ServiceCenterDetail;
use crate::models::snapshot::FleetSnapshot;
use crate::services::model_performance_service::{resolve_model, synthesize_model_performance_for};
use crate::services::overview_service::synthesize_overview;
use crate::services::random_source::RandomSource;
use crate::services::service_center_service::{find_center, synthesize_center_detail, synthesize_service_centers};
use crate::utils::errors::{AppError, AppResult};

pub fn generate_snapshot<R: RandomSource + ?Sized>(rng: &mut R) -> FleetSnapshot {
    let overview = synthesize_overview(rng);
    let model_performance = overview
        .model_summary
        .iter()
        .map(|summary| synthesize_model_performance_for(rng, summary))
        .collect();
    let service_centers = synthesize_service_centers(rng);
    let service_center_details = service_centers
        .iter()
        .map(|center| synthesize_center_detail(rng, center))
        .collect();

    let snapshot = FleetSnapshot {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        overview,
        model_performance,
        service_centers,
        service_center_details,
    };
    log::info!("📸 Snapshot de flota generado: {}", snapshot.id);
    snapshot
}

impl FleetSnapshot {
    /// Informe de un modelo según la política de búsqueda
    pub fn find_model_performance(&self, model_id: &str, policy: LookupPolicy) -> AppResult<&ModelPerformance> {
        let model = resolve_model(model_id, policy)?;
        self.model_performance
            .iter()
            .find(|report| report.model_id == model.model_id)
            .ok_or_else(|| AppError::Internal(format!("snapshot without report for '{}'", model.model_id)))
    }

    /// Detalle de un centro según la política de búsqueda
    pub fn find_service_center_detail(&self, id: &str, policy: LookupPolicy) -> AppResult<&ServiceCenterDetail> {
        let center = find_center(&self.service_centers, id, policy)?;
        self.service_center_details
            .iter()
            .find(|detail| detail.id == center.id)
            .ok_or_else(|| AppError::Internal(format!("snapshot without detail for '{}'", center.id)))
    }
}
