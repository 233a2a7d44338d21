//! Read-side store traits the engine consumes.
//!
//! The surrounding platform owns the data; the engine only needs these five
//! lookups. Implementations must return rows newest-first where noted and
//! never invent data -- absence is communicated with `None`/empty vectors.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{GrowthPoint, MediaInsight, MediaItem, Profile, Snapshot};

/// Opaque store failure. Concrete backends map their own error types into
/// this; the engine treats any store error as fatal for the request.
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, profile_id: Uuid) -> Result<Option<Profile>, StoreError>;
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The most recent `limit` snapshots for a profile, newest first.
    async fn recent(&self, profile_id: Uuid, limit: usize) -> Result<Vec<Snapshot>, StoreError>;
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// The most recent `limit` media items for a profile, newest first.
    async fn recent_media(
        &self,
        profile_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MediaItem>, StoreError>;

    /// All insight rows fetched at or after `cutoff` for a profile's media.
    async fn insights_since(
        &self,
        profile_id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<MediaInsight>, StoreError>;
}

#[async_trait]
pub trait GrowthStore: Send + Sync {
    /// Daily growth points recorded on or after `cutoff`, oldest first.
    async fn points_since(
        &self,
        profile_id: Uuid,
        cutoff: NaiveDate,
    ) -> Result<Vec<GrowthPoint>, StoreError>;
}

/// The bundle of store handles a [`crate::engine::ScoringEngine`] works over.
#[derive(Clone)]
pub struct StoreSet {
    pub profiles: std::sync::Arc<dyn ProfileStore>,
    pub snapshots: std::sync::Arc<dyn SnapshotStore>,
    pub media: std::sync::Arc<dyn MediaStore>,
    pub growth: std::sync::Arc<dyn GrowthStore>,
}
