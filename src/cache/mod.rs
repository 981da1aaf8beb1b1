//! Sistema de cache
//!
//! Cache en memoria del snapshot de flota para el modo `tick`.

pub mod snapshot_cache;

pub use snapshot_cache::{SnapshotCache, SnapshotCacheStats};
