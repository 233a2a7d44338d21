//! Category 6 -- Monetisation.
//!
//! AI-predicted monetisation potential, per-view payout trust, and audience
//! sentiment. Every metric defaults to the FULL score when the provider or
//! its data is unavailable -- the opposite policy to content relevance, kept
//! deliberately: a brand filtering on monetisation should not see profiles
//! punished for a judgment nobody has made yet.

use crate::cache::{Insight, InsightGate};
use crate::report::{Category, CategoryScore, InsightSource, MetricDetail, MetricScore};
use crate::signals::ScoringContext;
use crate::tiers::VIEW_PAYOUT;
use crate::types::Snapshot;

pub const W_POTENTIAL: u32 = 50;
pub const W_BRAND_TRUST: u32 = 30;
pub const W_AUDIENCE_SENTIMENT: u32 = 20;

const _: () = assert!(
    W_POTENTIAL + W_BRAND_TRUST + W_AUDIENCE_SENTIMENT == 100,
    "monetisation weights must sum to exactly 100"
);

/// Every monetisation metric falls back to a full score.
const DEFAULT_SCORE: f64 = 10.0;

pub async fn score(ctx: &ScoringContext, gate: &InsightGate) -> CategoryScore {
    let context = ctx.profile_context();
    let snapshot = ctx.snapshot.as_ref();

    let (potential, trust, sentiment) = tokio::join!(
        potential_metric(gate, snapshot, &context),
        trust_metric(gate, snapshot, &context),
        sentiment_metric(gate, snapshot, &context),
    );

    CategoryScore::from_breakdown(Category::Monetisation, vec![potential, trust, sentiment])
}

async fn potential_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    context: &crate::insight::ProfileContext,
) -> MetricScore {
    let insight = gate
        .fetch(
            "monetisation_potential",
            snapshot,
            |cache| Some((cache.monetisation_rating, String::new())),
            || async {
                gate.provider()
                    .predict_monetisation(context)
                    .await
                    .map(|m| (m.rating, m.feedback))
            },
        )
        .await;

    // Provider rates on a 1–50 scale; divide by 5 for 0–10.
    let (rating, score, source, feedback) = match insight {
        Insight::Cached((r, _)) => (
            Some(r),
            r / 5.0,
            InsightSource::Cached,
            "served from snapshot cache".to_string(),
        ),
        Insight::Fresh((r, feedback)) => (Some(r), r / 5.0, InsightSource::Fresh, feedback),
        Insight::Unavailable => (
            None,
            DEFAULT_SCORE,
            InsightSource::Fallback,
            "monetisation judgment unavailable, full score applied".to_string(),
        ),
    };

    MetricScore {
        label: "monetisation_potential",
        score: score.clamp(0.0, 10.0),
        weight: W_POTENTIAL,
        detail: MetricDetail::MonetisationPotential {
            rating,
            source,
            feedback,
        },
    }
}

async fn trust_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    context: &crate::insight::ProfileContext,
) -> MetricScore {
    let insight = gate
        .fetch(
            "view_payout",
            snapshot,
            |cache| Some(cache.view_payout_estimate),
            || async {
                gate.provider()
                    .estimate_view_payout(context)
                    .await
                    .map(|p| p.amount)
            },
        )
        .await;

    // Payout tiers produce a 5–30 raw trust value; divide by 3 for 0–10.
    let (payout, score, source) = match insight {
        Insight::Cached(p) => (Some(p), VIEW_PAYOUT.score(p) / 3.0, InsightSource::Cached),
        Insight::Fresh(p) => (Some(p), VIEW_PAYOUT.score(p) / 3.0, InsightSource::Fresh),
        Insight::Unavailable => (None, DEFAULT_SCORE, InsightSource::Fallback),
    };

    MetricScore {
        label: "brand_trust",
        score: score.clamp(0.0, 10.0),
        weight: W_BRAND_TRUST,
        detail: MetricDetail::BrandTrust {
            payout_estimate: payout,
            source,
        },
    }
}

async fn sentiment_metric(
    gate: &InsightGate,
    snapshot: Option<&Snapshot>,
    context: &crate::insight::ProfileContext,
) -> MetricScore {
    let insight = gate
        .fetch(
            "audience_sentiment",
            snapshot,
            |cache| Some(cache.audience_sentiment),
            || async {
                gate.provider()
                    .assess_audience_sentiment(context)
                    .await
                    .map(|s| s.score)
            },
        )
        .await;

    // Provider rates on a 1–20 scale; halve for 0–10.
    let (rating, score, source) = match insight {
        Insight::Cached(r) => (Some(r), r / 2.0, InsightSource::Cached),
        Insight::Fresh(r) => (Some(r), r / 2.0, InsightSource::Fresh),
        Insight::Unavailable => (None, DEFAULT_SCORE, InsightSource::Fallback),
    };

    MetricScore {
        label: "audience_sentiment",
        score: score.clamp(0.0, 10.0),
        weight: W_AUDIENCE_SENTIMENT,
        detail: MetricDetail::AudienceSentiment { rating, source },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctx_empty, ctx_with_snapshot, snapshot_with_cache, unavailable_gate};

    #[test]
    fn weights_sum_to_100() {
        assert_eq!(W_POTENTIAL + W_BRAND_TRUST + W_AUDIENCE_SENTIMENT, 100);
    }

    #[tokio::test]
    async fn unavailable_provider_scores_full_marks() {
        let category = score(&ctx_empty(), &unavailable_gate()).await;
        assert!((category.score - 100.0).abs() < 1e-9);
        for metric in &category.breakdown {
            assert!(
                (metric.score - 10.0).abs() < 1e-9,
                "expected full default for {}, got {}",
                metric.label,
                metric.score
            );
        }
    }

    #[tokio::test]
    async fn cached_judgments_drive_the_score() {
        // Cache: rating 40/50 => 8.0; payout 900 => tier 20 / 3; sentiment
        // 15/20 => 7.5.
        let ctx = ctx_with_snapshot(snapshot_with_cache());
        let category = score(&ctx, &unavailable_gate()).await;

        let by_label = |label: &str| {
            category
                .breakdown
                .iter()
                .find(|m| m.label == label)
                .unwrap_or_else(|| panic!("missing metric {label}"))
                .score
        };
        assert!((by_label("monetisation_potential") - 8.0).abs() < 1e-9);
        assert!((by_label("brand_trust") - 20.0 / 3.0).abs() < 1e-9);
        assert!((by_label("audience_sentiment") - 7.5).abs() < 1e-9);
    }
}
