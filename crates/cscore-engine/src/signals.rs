//! Snapshot and signal accessors.
//!
//! Pure reads: resolve everything the six calculators need for one profile
//! in a single pass, then hand them an immutable [`ScoringContext`]. No
//! analysis logic lives here, and missing data is never an error -- an empty
//! context simply drives the calculators down their default paths.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::insight::ProfileContext;
use crate::stores::{StoreError, StoreSet};
use crate::types::{Demographics, GrowthPoint, MediaInsight, MediaItem, Profile, Snapshot};

/// A media item paired with its most recent insight row in the window.
#[derive(Debug, Clone)]
pub struct JoinedInsight {
    pub media: MediaItem,
    pub insight: MediaInsight,
}

/// Everything the calculators read, loaded once per scoring request.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub profile: Profile,
    /// Most recent snapshot with genuine analysis data, falling back to a
    /// partial snapshot when no full one exists.
    pub snapshot: Option<Snapshot>,
    /// Demographics from historical snapshots that carry age and gender
    /// breakdowns, newest first.
    pub demographic_history: Vec<Demographics>,
    /// Recent media with non-empty media URLs, newest first.
    pub media: Vec<MediaItem>,
    /// Media joined to their latest insight within the insight window.
    pub insights: Vec<JoinedInsight>,
    /// Growth points within the growth window, oldest first.
    pub growth: Vec<GrowthPoint>,
    /// Reference instant for all window math in this request.
    pub now: DateTime<Utc>,
}

impl ScoringContext {
    /// Non-empty captions of the sampled media, newest first.
    #[must_use]
    pub fn captions(&self) -> Vec<String> {
        self.media
            .iter()
            .filter_map(|m| m.caption.as_deref())
            .filter(|c| !c.trim().is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Media URLs of the sampled media, newest first.
    #[must_use]
    pub fn media_urls(&self) -> Vec<String> {
        self.media
            .iter()
            .filter_map(|m| m.media_url.clone())
            .collect()
    }

    /// Sampled media posted within the trailing `days` window.
    #[must_use]
    pub fn media_in_window(&self, days: i64) -> Vec<&MediaItem> {
        let cutoff = self.now - Duration::days(days);
        self.media.iter().filter(|m| m.posted_at >= cutoff).collect()
    }

    /// Reach values of the joined insights.
    #[must_use]
    pub fn reach_values(&self) -> Vec<f64> {
        #[allow(clippy::cast_precision_loss)]
        let values: Vec<f64> = self
            .insights
            .iter()
            .map(|j| j.insight.reach as f64)
            .collect();
        values
    }

    /// Profile-level context for monetisation judgments.
    #[must_use]
    pub fn profile_context(&self) -> ProfileContext {
        ProfileContext {
            handle: self.profile.handle.clone(),
            follower_count: self.profile.follower_count,
            avg_engagement_rate: self
                .snapshot
                .as_ref()
                .map_or(0.0, |s| s.avg_engagement_rate),
            primary_niche: self
                .snapshot
                .as_ref()
                .and_then(|s| s.ai.as_ref())
                .map(|ai| ai.primary_niche.clone()),
        }
    }

    /// The campaign target country, honouring a per-profile override.
    #[must_use]
    pub fn target_country<'a>(&'a self, policy_country: &'a str) -> &'a str {
        self.profile
            .target_country
            .as_deref()
            .unwrap_or(policy_country)
    }
}

/// Loads a [`ScoringContext`] from the store set.
pub struct SignalReader<'a> {
    stores: &'a StoreSet,
    media_sample_limit: usize,
    insight_window_days: i64,
    growth_window_days: i64,
    demographic_history_limit: usize,
}

impl<'a> SignalReader<'a> {
    #[must_use]
    pub fn new(
        stores: &'a StoreSet,
        media_sample_limit: usize,
        insight_window_days: i64,
        growth_window_days: i64,
        demographic_history_limit: usize,
    ) -> Self {
        Self {
            stores,
            media_sample_limit,
            insight_window_days,
            growth_window_days,
            demographic_history_limit,
        }
    }

    /// Load the full context for `profile`. `now` anchors every trailing
    /// window so a request is reproducible against immutable data.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only on backend failure; missing rows are not
    /// errors.
    pub async fn load(
        &self,
        profile: Profile,
        now: DateTime<Utc>,
    ) -> Result<ScoringContext, StoreError> {
        let profile_id = profile.id;

        let snapshots = self
            .stores
            .snapshots
            .recent(profile_id, self.demographic_history_limit)
            .await?;
        let snapshot = select_snapshot(&snapshots);
        let demographic_history = demographic_history(&snapshots);

        let media = self
            .stores
            .media
            .recent_media(profile_id, self.media_sample_limit)
            .await?
            .into_iter()
            .filter(|m| m.media_url.as_deref().is_some_and(|u| !u.is_empty()))
            .collect::<Vec<_>>();

        let insight_cutoff = now - Duration::days(self.insight_window_days);
        let raw_insights = self
            .stores
            .media
            .insights_since(profile_id, insight_cutoff)
            .await?;
        let insights = join_insights(&media, raw_insights);

        let growth_cutoff = (now - Duration::days(self.growth_window_days)).date_naive();
        let growth = self
            .stores
            .growth
            .points_since(profile_id, growth_cutoff)
            .await?;

        if snapshot.is_none() {
            tracing::info!(profile_id = %profile_id, "no snapshot available, scoring on defaults");
        }

        Ok(ScoringContext {
            profile,
            snapshot,
            demographic_history,
            media,
            insights,
            growth,
            now,
        })
    }
}

/// Pick the snapshot to score against: the newest one with genuine analysis
/// data, else the newest partial one, else none.
fn select_snapshot(snapshots: &[Snapshot]) -> Option<Snapshot> {
    snapshots
        .iter()
        .find(|s| s.is_valid_for_scoring())
        .or_else(|| snapshots.first())
        .cloned()
}

/// Demographics usable for stability comparison: both age and gender
/// breakdowns populated.
fn demographic_history(snapshots: &[Snapshot]) -> Vec<Demographics> {
    snapshots
        .iter()
        .filter_map(|s| s.demographics.clone())
        .filter(|d| !d.age_buckets.is_empty() && !d.gender_split.is_empty())
        .collect()
}

/// Join media to their latest insight row, dropping insights for media
/// outside the sample.
fn join_insights(media: &[MediaItem], insights: Vec<MediaInsight>) -> Vec<JoinedInsight> {
    let mut latest: HashMap<Uuid, MediaInsight> = HashMap::new();
    for insight in insights {
        match latest.get(&insight.media_id) {
            Some(existing) if existing.fetched_at >= insight.fetched_at => {}
            _ => {
                latest.insert(insight.media_id, insight);
            }
        }
    }

    media
        .iter()
        .filter_map(|m| {
            latest.remove(&m.id).map(|insight| JoinedInsight {
                media: m.clone(),
                insight,
            })
        })
        .collect()
}
