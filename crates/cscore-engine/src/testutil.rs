//! Shared fixture builders for unit tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use cscore_core::ScoringPolicy;
use uuid::Uuid;

use crate::cache::InsightGate;
use crate::insight::{
    AudienceSentiment, CaptionSentiment, ConsistencyScore, CtaAssessment, FaceDetection,
    HashtagAssessment, InsightProvider, LanguageMix, MonetisationPotential, NicheDetection,
    ProfileContext, ProviderError, TrendRelevance, ViewPayoutEstimate,
};
use crate::signals::{JoinedInsight, ScoringContext};
use crate::types::{
    AccountType, AiInsightCache, CtaRating, Demographics, GrowthPoint, HashtagRating,
    MediaInsight, MediaItem, MediaType, Profile, Share, Snapshot, VisualQuality,
};

/// Fixed reference instant so fixtures are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub fn policy() -> ScoringPolicy {
    ScoringPolicy {
        target_country: "DE".to_string(),
        target_languages: vec!["de".to_string(), "en".to_string()],
        top_niches: vec![
            "fashion".to_string(),
            "beauty".to_string(),
            "fitness".to_string(),
            "travel".to_string(),
            "food".to_string(),
            "lifestyle".to_string(),
        ],
        engagement_benchmark_pct: 3.0,
        media_sample_limit: 20,
        insight_window_days: 30,
        growth_window_days: 60,
        demographic_history_limit: 12,
    }
}

pub fn profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        handle: "casey.creates".to_string(),
        display_name: "Casey".to_string(),
        follower_count: 25_000,
        account_type: AccountType::Creator,
        target_country: None,
        created_at: fixed_now(),
    }
}

pub fn snapshot(posts_analyzed: u32) -> Snapshot {
    Snapshot {
        id: Uuid::new_v4(),
        profile_id: Uuid::new_v4(),
        captured_at: fixed_now(),
        follower_count: 25_000,
        following_count: 300,
        media_count: 120,
        avg_engagement_rate: 2.5,
        posts_analyzed,
        demographics: None,
        ai: None,
    }
}

pub fn snapshot_with_cache() -> Snapshot {
    let mut snap = snapshot(20);
    snap.ai = Some(AiInsightCache {
        generated_at: fixed_now(),
        trend_relevance: 6.5,
        primary_niche: "fitness".to_string(),
        secondary_niches: vec!["food".to_string()],
        hashtag_rating: HashtagRating::Effective,
        language_mix: vec![
            Share {
                label: "de".to_string(),
                pct: 70.0,
            },
            Share {
                label: "en".to_string(),
                pct: 30.0,
            },
        ],
        face_share_pct: 80.0,
        visual_quality: VisualQuality {
            lighting: 8.0,
            editing: 7.0,
            aesthetics: 9.0,
        },
        consistency_score: 16.0,
        caption_sentiment: 40.0,
        cta_rating: CtaRating::Good,
        monetisation_rating: 40.0,
        view_payout_estimate: 900.0,
        audience_sentiment: 15.0,
        growth_feedback: String::new(),
        posting_feedback: String::new(),
    });
    snap
}

pub fn demographics(
    authenticity_pct: Option<f64>,
    age_buckets: &[(&str, f64)],
    countries: &[(&str, f64)],
) -> Demographics {
    let shares = |pairs: &[(&str, f64)]| {
        pairs
            .iter()
            .map(|(label, pct)| Share {
                label: (*label).to_string(),
                pct: *pct,
            })
            .collect::<Vec<_>>()
    };
    Demographics {
        age_buckets: shares(age_buckets),
        gender_split: vec![],
        countries: shares(countries),
        cities: vec![],
        authenticity_pct,
        business_page_linked: false,
    }
}

pub fn media_item(media_type: MediaType, caption: Option<&str>, days_ago: i64) -> MediaItem {
    MediaItem {
        id: Uuid::new_v4(),
        profile_id: Uuid::new_v4(),
        media_type,
        caption: caption.map(ToString::to_string),
        media_url: Some("https://cdn.example/media.jpg".to_string()),
        posted_at: fixed_now() - chrono::Duration::days(days_ago),
    }
}

pub fn ctx_empty() -> ScoringContext {
    ScoringContext {
        profile: profile(),
        snapshot: None,
        demographic_history: vec![],
        media: vec![],
        insights: vec![],
        growth: vec![],
        now: fixed_now(),
    }
}

pub fn ctx_with_snapshot(snapshot: Snapshot) -> ScoringContext {
    ScoringContext {
        snapshot: Some(snapshot),
        ..ctx_empty()
    }
}

pub fn ctx_with_media(media: Vec<MediaItem>) -> ScoringContext {
    ScoringContext {
        media,
        ..ctx_empty()
    }
}

pub fn ctx_with_reach(reach_values: &[f64]) -> ScoringContext {
    let insights = reach_values
        .iter()
        .map(|&reach| {
            let media = media_item(MediaType::Image, Some("caption"), 2);
            #[allow(clippy::cast_possible_truncation)]
            let insight = MediaInsight {
                media_id: media.id,
                fetched_at: fixed_now(),
                reach: reach as i64,
                likes: 10,
                comments: 2,
                saves: 1,
                shares: 0,
                video_completions: None,
            };
            JoinedInsight { media, insight }
        })
        .collect();
    ScoringContext {
        insights,
        ..ctx_empty()
    }
}

pub fn ctx_with_growth(follower_counts: &[i64]) -> ScoringContext {
    let profile_id = Uuid::new_v4();
    #[allow(clippy::cast_possible_wrap)]
    let growth = follower_counts
        .iter()
        .enumerate()
        .map(|(i, &count)| GrowthPoint {
            profile_id,
            recorded_on: (fixed_now()
                - chrono::Duration::days(follower_counts.len() as i64 - i as i64))
            .date_naive(),
            follower_count: count,
        })
        .collect();
    ScoringContext {
        growth,
        ..ctx_empty()
    }
}

/// Provider that is never available; every gate lookup degrades to the
/// metric's documented default unless the snapshot cache answers first.
pub struct NoInsightProvider;

#[async_trait]
impl InsightProvider for NoInsightProvider {
    async fn is_available(&self) -> bool {
        false
    }

    async fn analyze_trend_relevance(
        &self,
        _captions: &[String],
    ) -> Result<TrendRelevance, ProviderError> {
        Err(disabled())
    }

    async fn detect_niches(&self, _captions: &[String]) -> Result<NicheDetection, ProviderError> {
        Err(disabled())
    }

    async fn rate_hashtags(
        &self,
        _captions: &[String],
    ) -> Result<HashtagAssessment, ProviderError> {
        Err(disabled())
    }

    async fn analyze_language_mix(
        &self,
        _captions: &[String],
    ) -> Result<LanguageMix, ProviderError> {
        Err(disabled())
    }

    async fn detect_faces(&self, _media_urls: &[String]) -> Result<FaceDetection, ProviderError> {
        Err(disabled())
    }

    async fn assess_visual_quality(
        &self,
        _media_urls: &[String],
    ) -> Result<VisualQuality, ProviderError> {
        Err(disabled())
    }

    async fn assess_consistency(
        &self,
        _media_urls: &[String],
    ) -> Result<ConsistencyScore, ProviderError> {
        Err(disabled())
    }

    async fn analyze_caption_sentiment(
        &self,
        _captions: &[String],
    ) -> Result<CaptionSentiment, ProviderError> {
        Err(disabled())
    }

    async fn assess_cta_usage(
        &self,
        _captions: &[String],
    ) -> Result<CtaAssessment, ProviderError> {
        Err(disabled())
    }

    async fn predict_monetisation(
        &self,
        _context: &ProfileContext,
    ) -> Result<MonetisationPotential, ProviderError> {
        Err(disabled())
    }

    async fn estimate_view_payout(
        &self,
        _context: &ProfileContext,
    ) -> Result<ViewPayoutEstimate, ProviderError> {
        Err(disabled())
    }

    async fn assess_audience_sentiment(
        &self,
        _context: &ProfileContext,
    ) -> Result<AudienceSentiment, ProviderError> {
        Err(disabled())
    }
}

fn disabled() -> ProviderError {
    ProviderError("insight provider disabled".to_string())
}

pub fn unavailable_gate() -> InsightGate {
    InsightGate::new(Arc::new(NoInsightProvider), Duration::from_secs(1))
}
