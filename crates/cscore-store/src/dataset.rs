//! Loading and serving an exported creator dataset.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use cscore_engine::stores::{
    GrowthStore, MediaStore, ProfileStore, SnapshotStore, StoreError, StoreSet,
};
use cscore_engine::types::{GrowthPoint, MediaInsight, MediaItem, Profile, Snapshot};

#[derive(Debug, Error)]
pub enum StoreLoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset validation failed: {0}")]
    Validation(String),
}

/// One exported dataset: plain vectors, exactly as the platform dumps them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub insights: Vec<MediaInsight>,
    #[serde(default)]
    pub growth: Vec<GrowthPoint>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreLoadError`] if the file cannot be read or parsed, or
    /// if rows reference unknown profiles or media.
    pub fn from_path(path: &Path) -> Result<Self, StoreLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreLoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Referential integrity: every snapshot, media item, insight, and
    /// growth point must belong to a known profile/media row.
    fn validate(&self) -> Result<(), StoreLoadError> {
        let profile_ids: Vec<Uuid> = self.profiles.iter().map(|p| p.id).collect();
        let media_ids: Vec<Uuid> = self.media.iter().map(|m| m.id).collect();

        for snapshot in &self.snapshots {
            if !profile_ids.contains(&snapshot.profile_id) {
                return Err(StoreLoadError::Validation(format!(
                    "snapshot {} references unknown profile {}",
                    snapshot.id, snapshot.profile_id
                )));
            }
        }
        for media in &self.media {
            if !profile_ids.contains(&media.profile_id) {
                return Err(StoreLoadError::Validation(format!(
                    "media {} references unknown profile {}",
                    media.id, media.profile_id
                )));
            }
        }
        for insight in &self.insights {
            if !media_ids.contains(&insight.media_id) {
                return Err(StoreLoadError::Validation(format!(
                    "insight references unknown media {}",
                    insight.media_id
                )));
            }
        }
        for point in &self.growth {
            if !profile_ids.contains(&point.profile_id) {
                return Err(StoreLoadError::Validation(format!(
                    "growth point references unknown profile {}",
                    point.profile_id
                )));
            }
        }
        Ok(())
    }
}

/// Read-only store over a loaded [`Dataset`].
#[derive(Clone)]
pub struct DatasetStore {
    inner: Arc<Dataset>,
}

impl DatasetStore {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(dataset),
        }
    }

    /// Load a dataset file and wrap it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreLoadError`] on read, parse, or validation failure.
    pub fn from_path(path: &Path) -> Result<Self, StoreLoadError> {
        Ok(Self::new(Dataset::from_path(path)?))
    }

    /// Resolve a profile by UUID or handle -- CLI convenience, not part of
    /// the engine's store contract.
    #[must_use]
    pub fn resolve(&self, id_or_handle: &str) -> Option<Profile> {
        if let Ok(id) = id_or_handle.parse::<Uuid>() {
            return self.inner.profiles.iter().find(|p| p.id == id).cloned();
        }
        self.inner
            .profiles
            .iter()
            .find(|p| p.handle.eq_ignore_ascii_case(id_or_handle))
            .cloned()
    }

    /// All profiles in the dataset.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.inner.profiles
    }

    /// Bundle this store as all four engine store handles.
    #[must_use]
    pub fn store_set(&self) -> StoreSet {
        let shared: Arc<DatasetStore> = Arc::new(self.clone());
        StoreSet {
            profiles: shared.clone(),
            snapshots: shared.clone(),
            media: shared.clone(),
            growth: shared,
        }
    }
}

#[async_trait]
impl ProfileStore for DatasetStore {
    async fn get(&self, profile_id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .inner
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .cloned())
    }
}

#[async_trait]
impl SnapshotStore for DatasetStore {
    async fn recent(&self, profile_id: Uuid, limit: usize) -> Result<Vec<Snapshot>, StoreError> {
        let mut rows: Vec<Snapshot> = self
            .inner
            .snapshots
            .iter()
            .filter(|s| s.profile_id == profile_id)
            .cloned()
            .collect();
        rows.sort_by_key(|s| std::cmp::Reverse(s.captured_at));
        rows.truncate(limit);
        Ok(rows)
    }
}

#[async_trait]
impl MediaStore for DatasetStore {
    async fn recent_media(
        &self,
        profile_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MediaItem>, StoreError> {
        let mut rows: Vec<MediaItem> = self
            .inner
            .media
            .iter()
            .filter(|m| m.profile_id == profile_id)
            .cloned()
            .collect();
        rows.sort_by_key(|m| std::cmp::Reverse(m.posted_at));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insights_since(
        &self,
        profile_id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<MediaInsight>, StoreError> {
        let media_ids: Vec<Uuid> = self
            .inner
            .media
            .iter()
            .filter(|m| m.profile_id == profile_id)
            .map(|m| m.id)
            .collect();
        Ok(self
            .inner
            .insights
            .iter()
            .filter(|i| i.fetched_at >= cutoff && media_ids.contains(&i.media_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GrowthStore for DatasetStore {
    async fn points_since(
        &self,
        profile_id: Uuid,
        cutoff: NaiveDate,
    ) -> Result<Vec<GrowthPoint>, StoreError> {
        let mut rows: Vec<GrowthPoint> = self
            .inner
            .growth
            .iter()
            .filter(|g| g.profile_id == profile_id && g.recorded_on >= cutoff)
            .cloned()
            .collect();
        rows.sort_by_key(|g| g.recorded_on);
        Ok(rows)
    }
}
