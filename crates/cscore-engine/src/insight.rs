//! Contract with the external content-insight provider.
//!
//! Only the request/response shapes matter to the engine; the provider's
//! internals are out of scope. Every judgment the engine may ask for has a
//! typed response struct, and the whole surface is capability-checked via
//! [`InsightProvider::is_available`] before any paid call is made.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CtaRating, HashtagRating, Share, VisualQuality};

/// Opaque provider failure. The gate converts any of these into the
/// metric's documented fallback; they are never fatal to a request.
#[derive(Debug, Error)]
#[error("insight provider error: {0}")]
pub struct ProviderError(pub String);

/// Profile-level context passed with monetisation judgments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileContext {
    pub handle: String,
    pub follower_count: i64,
    pub avg_engagement_rate: f64,
    pub primary_niche: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRelevance {
    /// 1–10.
    pub score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheDetection {
    pub primary: String,
    pub secondary: Vec<String>,
}

impl NicheDetection {
    /// Primary plus secondary niches, in detection order.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        let mut all = vec![self.primary.clone()];
        all.extend(self.secondary.iter().cloned());
        all
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagAssessment {
    pub rating: HashtagRating,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageMix {
    /// Caption languages with shares summing to ~100.
    pub languages: Vec<Share>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceDetection {
    /// Share of sampled posts with a detectable face, 0–100.
    pub face_share_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyScore {
    /// 1–20.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSentiment {
    /// −100..+100.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaAssessment {
    pub rating: CtaRating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetisationPotential {
    /// 1–50.
    pub rating: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewPayoutEstimate {
    /// Predicted payout per 1k views, in micro-units of campaign currency.
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceSentiment {
    /// 1–20.
    pub score: f64,
}

/// External AI content-analysis capability.
///
/// Calls are expected to block on network I/O; the engine wraps each in a
/// bounded timeout and substitutes documented defaults on any failure.
/// Implementations must not retry internally.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Cheap capability probe, checked before every paid call.
    async fn is_available(&self) -> bool;

    async fn analyze_trend_relevance(
        &self,
        captions: &[String],
    ) -> Result<TrendRelevance, ProviderError>;

    async fn detect_niches(&self, captions: &[String]) -> Result<NicheDetection, ProviderError>;

    async fn rate_hashtags(&self, captions: &[String])
        -> Result<HashtagAssessment, ProviderError>;

    async fn analyze_language_mix(&self, captions: &[String])
        -> Result<LanguageMix, ProviderError>;

    async fn detect_faces(&self, media_urls: &[String]) -> Result<FaceDetection, ProviderError>;

    async fn assess_visual_quality(
        &self,
        media_urls: &[String],
    ) -> Result<VisualQuality, ProviderError>;

    async fn assess_consistency(
        &self,
        media_urls: &[String],
    ) -> Result<ConsistencyScore, ProviderError>;

    async fn analyze_caption_sentiment(
        &self,
        captions: &[String],
    ) -> Result<CaptionSentiment, ProviderError>;

    async fn assess_cta_usage(&self, captions: &[String]) -> Result<CtaAssessment, ProviderError>;

    async fn predict_monetisation(
        &self,
        context: &ProfileContext,
    ) -> Result<MonetisationPotential, ProviderError>;

    async fn estimate_view_payout(
        &self,
        context: &ProfileContext,
    ) -> Result<ViewPayoutEstimate, ProviderError>;

    async fn assess_audience_sentiment(
        &self,
        context: &ProfileContext,
    ) -> Result<AudienceSentiment, ProviderError>;
}
