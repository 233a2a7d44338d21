//! Domain types read by the scoring engine.
//!
//! All of these are owned by the surrounding platform and read-only here.
//! `Snapshot` is the one type with a lifecycle quirk: its [`AiInsightCache`]
//! is populated exactly once right after creation and the snapshot is
//! immutable from then on -- the cache stays valid until the next snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Creator,
    Business,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub handle: String,
    pub display_name: String,
    pub follower_count: i64,
    pub account_type: AccountType,
    /// Per-profile override of the policy-level target country.
    pub target_country: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One labelled slice of an audience breakdown (age bucket, gender, country,
/// city, or caption language), as a percentage of the whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub label: String,
    pub pct: f64,
}

/// Audience demographics attached to a snapshot.
///
/// Only present when the profile has a linked business-page integration;
/// organic accounts sync without any of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    pub age_buckets: Vec<Share>,
    pub gender_split: Vec<Share>,
    pub countries: Vec<Share>,
    pub cities: Vec<Share>,
    /// Share of followers the platform classifies as active/genuine.
    /// `None` when the platform API does not report authenticity.
    pub authenticity_pct: Option<f64>,
    pub business_page_linked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashtagRating {
    Outperforming,
    Effective,
    Medium,
    NeedImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaRating {
    Good,
    Medium,
    Less,
}

/// Per-axis visual production sub-scores, each on a 1–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualQuality {
    pub lighting: f64,
    pub editing: f64,
    pub aesthetics: f64,
}

impl VisualQuality {
    /// Mean of the three sub-scores, already on the 0–10 scale.
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.lighting + self.editing + self.aesthetics) / 3.0
    }
}

/// AI judgments cached on a snapshot.
///
/// Invariant: these fields are populated together in a single pass tagged
/// with one `generated_at`; a snapshot either carries the full cache or none
/// of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiInsightCache {
    pub generated_at: DateTime<Utc>,
    /// Trend relevance on a 1–10 scale.
    pub trend_relevance: f64,
    pub primary_niche: String,
    pub secondary_niches: Vec<String>,
    pub hashtag_rating: HashtagRating,
    /// Caption language mix; shares sum to ~100.
    pub language_mix: Vec<Share>,
    /// Share of sampled posts containing a detectable face.
    pub face_share_pct: f64,
    pub visual_quality: VisualQuality,
    /// Color/mood consistency on a 1–20 scale.
    pub consistency_score: f64,
    /// Caption sentiment on a −100..+100 scale.
    pub caption_sentiment: f64,
    pub cta_rating: CtaRating,
    /// Monetisation potential on a 1–50 scale.
    pub monetisation_rating: f64,
    /// Predicted payout per 1k views, in micro-units of campaign currency.
    pub view_payout_estimate: f64,
    /// Audience sentiment on a 1–20 scale.
    pub audience_sentiment: f64,
    pub growth_feedback: String,
    pub posting_feedback: String,
}

/// Periodic immutable capture of a profile's aggregate analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub captured_at: DateTime<Utc>,
    pub follower_count: i64,
    pub following_count: i64,
    pub media_count: i64,
    /// Stored average engagement rate, in percent.
    pub avg_engagement_rate: f64,
    /// Number of posts the sync cycle analysed. Zero marks a partial,
    /// demographics-only snapshot.
    pub posts_analyzed: u32,
    pub demographics: Option<Demographics>,
    pub ai: Option<AiInsightCache>,
}

impl Snapshot {
    /// Whether this snapshot carries genuine analysis data, as opposed to a
    /// partial demographics-only capture.
    #[must_use]
    pub fn is_valid_for_scoring(&self) -> bool {
        self.posts_analyzed > 0
    }
}

/// One row per day per profile; used only for trend/peak-gain detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub profile_id: Uuid,
    pub recorded_on: NaiveDate,
    pub follower_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Reel,
    Carousel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub media_type: MediaType,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// Per-post metrics, appended once per fetch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInsight {
    pub media_id: Uuid,
    pub fetched_at: DateTime<Utc>,
    pub reach: i64,
    pub likes: i64,
    pub comments: i64,
    pub saves: i64,
    pub shares: i64,
    pub video_completions: Option<i64>,
}
