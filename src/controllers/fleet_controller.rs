//! Controlador de analítica de flota
//!
//! Expone las operaciones del dashboard como API asíncrona. Cada operación
//! espera primero la latencia simulada y después muestrea con la fuente
//! aleatoria compartida. Cancelar el future no deja efectos.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::SnapshotCache;
use crate::config::{EnvironmentConfig, LookupPolicy, SimulatedLatency, SnapshotMode};
use crate::dto::fleet_dto::{FleetQueryParams, ServiceCentersQueryParams};
use crate::models::chat::{ChatReply, ChatRequest};
use crate::models::fleet::{FleetOverview, ModelSummary};
use crate::models::model_performance::ModelPerformance;
use crate::models::service_center::{ServiceCenter, ServiceCenterDetail};
use crate::models::snapshot::{FleetSnapshot, SnapshotInfo};
use crate::services::random_source::{FixtureRng, RandomSource};
use crate::services::{chat_responder, model_performance_service, overview_service, service_center_service};
use crate::utils::errors::AppResult;

/// Contrato consumido por la capa de presentación
#[async_trait]
pub trait FleetAnalytics: Send + Sync {
    async fn get_overview(&self, params: FleetQueryParams) -> AppResult<FleetOverview>;

    async fn get_models(&self, params: FleetQueryParams) -> AppResult<Vec<ModelSummary>>;

    async fn get_model_performance(&self, model_id: &str) -> AppResult<ModelPerformance>;

    async fn get_service_centers(&self, params: ServiceCentersQueryParams) -> AppResult<Vec<ServiceCenter>>;

    async fn get_service_center_detail(&self, id: &str) -> AppResult<ServiceCenterDetail>;

    async fn send_chat_message(&self, request: ChatRequest) -> AppResult<ChatReply>;

    /// Regenerar el snapshot (solo tiene efecto en modo `tick`)
    async fn refresh_snapshot(&self) -> AppResult<SnapshotInfo>;

    async fn snapshot_info(&self) -> AppResult<SnapshotInfo>;
}

/// Implementación simulada sobre datos aleatorios
pub struct FleetController {
    rng: Mutex<Box<dyn RandomSource>>,
    snapshots: SnapshotCache,
    lookup_policy: LookupPolicy,
    snapshot_mode: SnapshotMode,
    latency: SimulatedLatency,
}

impl FleetController {
    pub fn new(
        rng: Box<dyn RandomSource>,
        lookup_policy: LookupPolicy,
        snapshot_mode: SnapshotMode,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            rng: Mutex::new(rng),
            snapshots: SnapshotCache::new(),
            lookup_policy,
            snapshot_mode,
            latency,
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(
            Box::new(FixtureRng::from_seed_option(config.rng_seed)),
            config.lookup_policy,
            config.snapshot_mode,
            config.latency,
        )
    }

    pub fn into_shared(self) -> Arc<dyn FleetAnalytics> {
        Arc::new(self)
    }

    async fn simulate_latency(&self, delay: std::time::Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Ejecutar un muestreo con la fuente compartida
    async fn sample<T>(&self, f: impl FnOnce(&mut (dyn RandomSource + 'static)) -> T) -> T {
        let mut rng = self.rng.lock().await;
        f(rng.as_mut())
    }

    async fn snapshot(&self) -> Arc<FleetSnapshot> {
        let mut rng = self.rng.lock().await;
        self.snapshots.get_or_generate(rng.as_mut()).await
    }

    async fn list_service_centers(&self) -> Vec<ServiceCenter> {
        self.simulate_latency(self.latency.service_centers).await;
        match self.snapshot_mode {
            SnapshotMode::PerRequest => self.sample(service_center_service::synthesize_service_centers).await,
            SnapshotMode::Tick => self.snapshot().await.service_centers.clone(),
        }
    }

    async fn build_snapshot_info(&self) -> SnapshotInfo {
        let current = self.snapshots.peek().await;
        let stats = self.snapshots.stats().await;
        SnapshotInfo {
            mode: self.snapshot_mode.as_str().to_string(),
            snapshot_id: current.as_ref().map(|s| s.id),
            generated_at: current.as_ref().map(|s| s.generated_at),
            hits: stats.hits,
            generations: stats.generations,
        }
    }
}

#[async_trait]
impl FleetAnalytics for FleetController {
    async fn get_overview(&self, params: FleetQueryParams) -> AppResult<FleetOverview> {
        debug!("Filtros de overview (no aplicados): {:?}", params);
        self.simulate_latency(self.latency.overview).await;

        let overview = match self.snapshot_mode {
            SnapshotMode::PerRequest => self.sample(overview_service::synthesize_overview).await,
            SnapshotMode::Tick => self.snapshot().await.overview.clone(),
        };
        info!("📊 Overview servido: {} vehículos", overview.total_vehicles);
        Ok(overview)
    }

    async fn get_models(&self, params: FleetQueryParams) -> AppResult<Vec<ModelSummary>> {
        debug!("Filtros de modelos (no aplicados): {:?}", params);
        self.simulate_latency(self.latency.models).await;

        let models = match self.snapshot_mode {
            SnapshotMode::PerRequest => self.sample(overview_service::synthesize_model_summaries).await,
            SnapshotMode::Tick => self.snapshot().await.overview.model_summary.clone(),
        };
        info!("🚗 {} modelos servidos", models.len());
        Ok(models)
    }

    async fn get_model_performance(&self, model_id: &str) -> AppResult<ModelPerformance> {
        self.simulate_latency(self.latency.model_performance).await;

        let report = match self.snapshot_mode {
            SnapshotMode::PerRequest => {
                let policy = self.lookup_policy;
                self.sample(|rng| model_performance_service::model_performance(rng, model_id, policy))
                    .await?
            }
            SnapshotMode::Tick => self
                .snapshot()
                .await
                .find_model_performance(model_id, self.lookup_policy)?
                .clone(),
        };
        info!("📈 Rendimiento servido para '{}' ({})", model_id, report.model_id);
        Ok(report)
    }

    async fn get_service_centers(&self, params: ServiceCentersQueryParams) -> AppResult<Vec<ServiceCenter>> {
        debug!(
            "Filtro de región para centros (no aplicado): {:?}",
            params.region.and_then(|filter| filter.region())
        );
        let centers = self.list_service_centers().await;
        info!("🏭 {} centros de servicio servidos", centers.len());
        Ok(centers)
    }

    async fn get_service_center_detail(&self, id: &str) -> AppResult<ServiceCenterDetail> {
        self.simulate_latency(self.latency.service_center_detail).await;

        let detail = match self.snapshot_mode {
            SnapshotMode::PerRequest => {
                let centers = self.list_service_centers().await;
                let center = service_center_service::find_center(&centers, id, self.lookup_policy)?;
                self.sample(|rng| service_center_service::synthesize_center_detail(rng, center))
                    .await
            }
            SnapshotMode::Tick => {
                self.simulate_latency(self.latency.service_centers).await;
                self.snapshot()
                    .await
                    .find_service_center_detail(id, self.lookup_policy)?
                    .clone()
            }
        };
        info!("🏭 Detalle servido para '{}' ({})", id, detail.id);
        Ok(detail)
    }

    async fn send_chat_message(&self, request: ChatRequest) -> AppResult<ChatReply> {
        if let Some(context) = &request.context {
            debug!("Contexto del chat (informativo): {:?}", context);
        }
        self.simulate_latency(self.latency.chat).await;

        let reply = chat_responder::respond(&request);
        info!("💬 Respuesta del asistente enviada");
        Ok(reply)
    }

    async fn refresh_snapshot(&self) -> AppResult<SnapshotInfo> {
        if self.snapshot_mode == SnapshotMode::Tick {
            let mut rng = self.rng.lock().await;
            self.snapshots.refresh(rng.as_mut()).await;
        } else {
            debug!("Refresh ignorado en modo {}", self.snapshot_mode.as_str());
        }
        Ok(self.build_snapshot_info().await)
    }

    async fn snapshot_info(&self) -> AppResult<SnapshotInfo> {
        Ok(self.build_snapshot_info().await)
    }
}
