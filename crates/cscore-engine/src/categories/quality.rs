//! Category 3 -- Content Quality.
//!
//! Visual production value, color/mood consistency, caption sentiment, and
//! call-to-action usage, all AI-judged. Unlike content relevance, every
//! metric here falls back to a neutral-to-good default when the provider
//! cannot judge -- an unanalyzed profile gets the benefit of the doubt on
//! production quality, not a zero.

use crate::cache::{Insight, InsightGate};
use crate::report::{Category, CategoryScore, InsightSource, MetricDetail, MetricScore};
use crate::signals::ScoringContext;
use crate::tiers::SENTIMENT_BANDS;
use crate::types::{CtaRating, Snapshot, VisualQuality};

pub const W_VISUAL: u32 = 60;
pub const W_CONSISTENCY: u32 = 20;
pub const W_SENTIMENT: u32 = 10;
pub const W_CTA: u32 = 10;

const _: () = assert!(
    W_VISUAL + W_CONSISTENCY + W_SENTIMENT + W_CTA == 100,
    "content-quality weights must sum to exactly 100"
);

/// Benefit-of-the-doubt defaults applied when the provider cannot judge.
const DEFAULT_VISUAL_SCORE: f64 = 7.5;
const DEFAULT_CONSISTENCY_SCORE: f64 = 8.0;
const DEFAULT_SENTIMENT_SCORE: f64 = 7.0;
const DEFAULT_CTA_SCORE: f64 = 7.0;

pub async fn score(ctx: &ScoringContext, gate: &InsightGate) -> CategoryScore {
    let captions = ctx.captions();
    let media_urls = ctx.media_urls();
    let snapshot = ctx.snapshot.as_ref();

    let (visual, consistency, sentiment, cta) = tokio::join!(
        visual_metric(gate, snapshot, &media_urls),
        consistency_metric(gate, snapshot, &media_urls),
        sentiment_metric(gate, snapshot, &captions),
        cta_metric(gate, snapshot, &captions),
    );

    CategoryScore::from_breakdown(
        Category::ContentQuality,
        vec![visual, consistency, sentiment, cta],
    )
}

async fn visual_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    media_urls: &[String],
) -> MetricScore {
    let insight = if media_urls.is_empty() {
        Insight::Unavailable
    } else {
        gate.fetch(
            "visual_quality",
            snapshot,
            |cache| Some(cache.visual_quality),
            || async { gate.provider().assess_visual_quality(media_urls).await },
        )
        .await
    };

    let (vq, source) = match insight {
        Insight::Cached(v) => (v, InsightSource::Cached),
        Insight::Fresh(v) => (v, InsightSource::Fresh),
        Insight::Unavailable => (
            VisualQuality {
                lighting: DEFAULT_VISUAL_SCORE,
                editing: DEFAULT_VISUAL_SCORE,
                aesthetics: DEFAULT_VISUAL_SCORE,
            },
            InsightSource::Fallback,
        ),
    };

    MetricScore {
        label: "visual_quality",
        score: vq.average().clamp(0.0, 10.0),
        weight: W_VISUAL,
        detail: MetricDetail::VisualQuality {
            lighting: vq.lighting,
            editing: vq.editing,
            aesthetics: vq.aesthetics,
            source,
        },
    }
}

async fn consistency_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    media_urls: &[String],
) -> MetricScore {
    let insight = if media_urls.is_empty() {
        Insight::Unavailable
    } else {
        gate.fetch(
            "consistency",
            snapshot,
            |cache| Some(cache.consistency_score),
            || async {
                gate.provider()
                    .assess_consistency(media_urls)
                    .await
                    .map(|c| c.score)
            },
        )
        .await
    };

    // Provider judges on a 1–20 scale; halve to land on 0–10.
    let (raw, score, source) = match insight {
        Insight::Cached(raw) => (raw, raw / 2.0, InsightSource::Cached),
        Insight::Fresh(raw) => (raw, raw / 2.0, InsightSource::Fresh),
        Insight::Unavailable => (
            DEFAULT_CONSISTENCY_SCORE * 2.0,
            DEFAULT_CONSISTENCY_SCORE,
            InsightSource::Fallback,
        ),
    };

    MetricScore {
        label: "color_mood_consistency",
        score: score.clamp(0.0, 10.0),
        weight: W_CONSISTENCY,
        detail: MetricDetail::Consistency {
            raw_score: raw,
            source,
        },
    }
}

async fn sentiment_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    captions: &[String],
) -> MetricScore {
    let insight = if captions.is_empty() {
        Insight::Unavailable
    } else {
        gate.fetch(
            "caption_sentiment",
            snapshot,
            |cache| Some(cache.caption_sentiment),
            || async {
                gate.provider()
                    .analyze_caption_sentiment(captions)
                    .await
                    .map(|s| s.score)
            },
        )
        .await
    };

    match insight {
        Insight::Cached(raw) | Insight::Fresh(raw) => {
            let source = if matches!(insight, Insight::Cached(_)) {
                InsightSource::Cached
            } else {
                InsightSource::Fresh
            };
            // Map −100..+100 onto a positive percentage, then band it.
            let positive_pct = (raw + 100.0) / 2.0;
            MetricScore {
                label: "caption_sentiment",
                score: SENTIMENT_BANDS.score(positive_pct),
                weight: W_SENTIMENT,
                detail: MetricDetail::CaptionSentiment {
                    sentiment: raw,
                    positive_pct,
                    source,
                },
            }
        }
        Insight::Unavailable => MetricScore {
            label: "caption_sentiment",
            score: DEFAULT_SENTIMENT_SCORE,
            weight: W_SENTIMENT,
            detail: MetricDetail::CaptionSentiment {
                sentiment: 0.0,
                positive_pct: 50.0,
                source: InsightSource::Fallback,
            },
        },
    }
}

async fn cta_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    captions: &[String],
) -> MetricScore {
    let insight = if captions.is_empty() {
        Insight::Unavailable
    } else {
        gate.fetch(
            "cta_usage",
            snapshot,
            |cache| Some(cache.cta_rating),
            || async {
                gate.provider()
                    .assess_cta_usage(captions)
                    .await
                    .map(|c| c.rating)
            },
        )
        .await
    };

    let (rating, score, source) = match insight {
        Insight::Cached(r) => (Some(r), cta_score(r), InsightSource::Cached),
        Insight::Fresh(r) => (Some(r), cta_score(r), InsightSource::Fresh),
        Insight::Unavailable => (None, DEFAULT_CTA_SCORE, InsightSource::Fallback),
    };

    MetricScore {
        label: "cta_usage",
        score,
        weight: W_CTA,
        detail: MetricDetail::CtaUsage { rating, source },
    }
}

#[must_use]
pub fn cta_score(rating: CtaRating) -> f64 {
    match rating {
        CtaRating::Good => 10.0,
        CtaRating::Medium => 7.0,
        CtaRating::Less => 4.0,
    }
}
