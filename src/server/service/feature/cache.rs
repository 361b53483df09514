//! Feature index cache for the documentation endpoint.
//!
//! This module provides the `FeatureCacheService`, a single-slot cache holding the last
//! built `FeatureIndex` and the instant it was built. The index is rebuilt when the slot is
//! empty, when the caller forces a refresh, or when the cached index is older than the TTL.
//! Indexes are shared by `Arc` and replaced wholesale, never mutated in place.

use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::server::{
    error::AppError, model::feature::FeatureIndex, service::feature::FeatureIndexService,
};

/// Time after which a cached index is considered stale.
pub const FEATURE_INDEX_TTL: Duration = Duration::from_secs(60);

/// Built index with the instant it was stored.
struct CachedIndex {
    /// The index as served to callers.
    index: Arc<FeatureIndex>,
    /// Monotonic build time used for staleness checks.
    built_at: Instant,
}

impl CachedIndex {
    /// Checks whether the index is older than `ttl`.
    fn is_stale(&self, ttl: Duration) -> bool {
        self.built_at.elapsed() > ttl
    }
}

/// Service serving the feature index from a TTL-bound cache slot.
///
/// Cloning the service is cheap and every clone shares the same slot. The slot lock is only
/// held to read or replace the slot, never during a rebuild, so concurrent callers that all
/// find the slot stale each rebuild and the last one to finish wins. Rebuilds are
/// idempotent over an unchanged tree, so the duplicates only cost time.
#[derive(Clone)]
pub struct FeatureCacheService {
    /// The cached index, if one has been built.
    slot: Arc<RwLock<Option<CachedIndex>>>,
    /// Command root handed to the index builder.
    commands_root: Arc<PathBuf>,
    /// Maximum age of a cached index.
    ttl: Duration,
}

impl FeatureCacheService {
    /// Creates a new FeatureCacheService with an empty slot and the default TTL.
    ///
    /// # Arguments
    /// - `commands_root` - Directory holding the command source files
    ///
    /// # Returns
    /// - `FeatureCacheService` - New service instance with no cached index
    pub fn new(commands_root: PathBuf) -> Self {
        Self::with_ttl(commands_root, FEATURE_INDEX_TTL)
    }

    /// Creates a new FeatureCacheService with a custom TTL.
    pub fn with_ttl(commands_root: PathBuf, ttl: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            commands_root: Arc::new(commands_root),
            ttl,
        }
    }

    /// Returns the cached index, rebuilding it first when needed.
    ///
    /// # Arguments
    /// - `force_refresh` - Rebuild even if the cached index is still fresh
    ///
    /// # Returns
    /// - `Ok(Arc<FeatureIndex>)` - The cached or freshly built index
    /// - `Err(AppError::TaskErr)` - The blocking build task panicked
    pub async fn get_index(&self, force_refresh: bool) -> Result<Arc<FeatureIndex>, AppError> {
        if !force_refresh {
            if let Some(cached) = self.slot.read().await.as_ref() {
                if !cached.is_stale(self.ttl) {
                    return Ok(cached.index.clone());
                }
            }
        }

        self.rebuild().await
    }

    /// Builds a new index and stores it in the slot.
    ///
    /// The build runs on the blocking thread pool since it walks and reads the command tree
    /// synchronously. It always runs to completion.
    ///
    /// # Returns
    /// - `Ok(Arc<FeatureIndex>)` - The newly built index
    /// - `Err(AppError::TaskErr)` - The blocking build task panicked
    pub async fn rebuild(&self) -> Result<Arc<FeatureIndex>, AppError> {
        let root = self.commands_root.clone();
        let index = tokio::task::spawn_blocking(move || FeatureIndexService::new(&root).build())
            .await?;
        let index = Arc::new(index);

        *self.slot.write().await = Some(CachedIndex {
            index: index.clone(),
            built_at: Instant::now(),
        });

        Ok(index)
    }
}
