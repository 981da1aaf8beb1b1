//! Cache del snapshot de flota
//!
//! Mantiene el snapshot vigente en modo `tick` y estadísticas de uso.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::snapshot::FleetSnapshot;
use crate::services::random_source::RandomSource;
use crate::services::snapshot_service::generate_snapshot;

/// Estadísticas del cache
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCacheStats {
    /// Consultas servidas desde un snapshot existente
    pub hits: u64,
    /// Snapshots generados (primer uso + refresh)
    pub generations: u64,
}

/// Cache de un único snapshot compartido
#[derive(Default)]
pub struct SnapshotCache {
    current: RwLock<Option<Arc<FleetSnapshot>>>,
    hits: AtomicU64,
    generations: AtomicU64,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot vigente, generándolo en el primer uso
    pub async fn get_or_generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Arc<FleetSnapshot> {
        if let Some(snapshot) = self.current.read().await.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit para snapshot {}", snapshot.id);
            return Arc::clone(snapshot);
        }

        let mut current = self.current.write().await;
        // Otro llamador pudo generarlo mientras esperábamos el lock
        if let Some(snapshot) = current.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(snapshot);
        }

        let snapshot = Arc::new(generate_snapshot(rng));
        *current = Some(Arc::clone(&snapshot));
        self.generations.fetch_add(1, Ordering::Relaxed);
        snapshot
    }

    /// Sustituir el snapshot por uno nuevo (tick explícito)
    pub async fn refresh<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Arc<FleetSnapshot> {
        let snapshot = Arc::new(generate_snapshot(rng));
        let previous = self.current.write().await.replace(Arc::clone(&snapshot));
        self.generations.fetch_add(1, Ordering::Relaxed);

        info!(
            "🔄 Snapshot refrescado: {} -> {}",
            previous.map(|s| s.id.to_string()).unwrap_or_else(|| "-".to_string()),
            snapshot.id
        );
        snapshot
    }

    /// Snapshot vigente sin generar uno nuevo
    pub async fn peek(&self) -> Option<Arc<FleetSnapshot>> {
        self.current.read().await.clone()
    }

    pub async fn stats(&self) -> SnapshotCacheStats {
        SnapshotCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            generations: self.generations.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random_source::FixtureRng;

    #[tokio::test]
    async fn test_snapshot_is_generated_once_and_reused() {
        let cache = SnapshotCache::new();
        let mut rng = FixtureRng::seeded(1);

        assert!(cache.peek().await.is_none());
        let first = cache.get_or_generate(&mut rng).await;
        let second = cache.get_or_generate(&mut rng).await;

        assert_eq!(first.id, second.id);
        assert_eq!(cache.stats().await, SnapshotCacheStats { hits: 1, generations: 1 });
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let cache = SnapshotCache::new();
        let mut rng = FixtureRng::seeded(2);

        let first = cache.get_or_generate(&mut rng).await;
        let refreshed = cache.refresh(&mut rng).await;
        let current = cache.get_or_generate(&mut rng).await;

        assert_ne!(first.id, refreshed.id);
        assert_eq!(current.id, refreshed.id);
        assert_eq!(cache.stats().await.generations, 2);
    }

    #[tokio::test]
    async fn test_stats_match_stored_snapshots() {
        let cache = SnapshotCache::new();
        let mut rng = FixtureRng::seeded(3);

        for _ in 0..3 {
            cache.refresh(&mut rng).await;
            assert!(cache.peek().await.is_some());
        }
        cache.get_or_generate(&mut rng).await;

        assert_eq!(cache.stats().await, SnapshotCacheStats { hits: 1, generations: 3 });
    }
}
