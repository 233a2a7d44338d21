//! Category 2 -- Content Relevance.
//!
//! Eight weighted sub-metrics covering what the creator posts and how well
//! it lands: trend fit, format mix, face presence, reach outliers, niche
//! match, hashtag effectiveness, and caption-language market fit.
//!
//! Missing-data policy: every sub-metric here zeroes out with an explanatory
//! message while keeping its weight. Only the AI trend judgment has a
//! non-zero fallback (7.0). This is the strict end of the engine's policy
//! spectrum; content quality and monetisation sit at the lenient end.

use cscore_core::ScoringPolicy;

use crate::cache::{Insight, InsightGate};
use crate::report::{
    Category, CategoryScore, InsightSource, MetricDetail, MetricScore, PerformanceBand,
};
use crate::signals::ScoringContext;
use crate::stats;
use crate::tiers::{NICHE_MATCHES, REEL_MIX_RAW, TOP_POSTS, WORST_POSTS};
use crate::types::{HashtagRating, MediaType};

pub const W_TREND: u32 = 35;
pub const W_MIX: u32 = 5;
pub const W_STYLE: u32 = 10;
pub const W_TOP_POSTS: u32 = 10;
pub const W_WORST_POSTS: u32 = 10;
pub const W_NICHE: u32 = 10;
pub const W_HASHTAG: u32 = 10;
pub const W_LANGUAGE: u32 = 10;

const _: () = assert!(
    W_TREND
        + W_MIX
        + W_STYLE
        + W_TOP_POSTS
        + W_WORST_POSTS
        + W_NICHE
        + W_HASHTAG
        + W_LANGUAGE
        == 100,
    "content-relevance weights must sum to exactly 100"
);

/// Fallback trend score when the provider cannot judge.
const DEFAULT_TREND_SCORE: f64 = 7.0;

pub async fn score(
    ctx: &ScoringContext,
    gate: &InsightGate,
    policy: &ScoringPolicy,
) -> CategoryScore {
    let captions = ctx.captions();
    let media_urls = ctx.media_urls();
    let snapshot = ctx.snapshot.as_ref();

    // The five AI-backed metrics fan out concurrently; the three
    // data-only metrics are pure arithmetic and run inline.
    let (trend, style, niche, hashtag, language) = tokio::join!(
        trend_metric(gate, snapshot, &captions),
        style_metric(gate, snapshot, &media_urls),
        niche_metric(gate, snapshot, &captions, policy),
        hashtag_metric(gate, snapshot, &captions),
        language_metric(gate, snapshot, &captions, policy),
    );

    let breakdown = vec![
        trend,
        mix_metric(ctx, policy.insight_window_days),
        style,
        performance_metric(ctx, PerformanceBand::Top),
        performance_metric(ctx, PerformanceBand::Worst),
        niche,
        hashtag,
        language,
    ];

    CategoryScore::from_breakdown(Category::ContentRelevance, breakdown)
}

async fn trend_metric(
    gate: &InsightGate,
    snapshot: Option<&crate::types::Snapshot>,
    captions: &[String],
) -> MetricScore {
    if captions.is_empty() {
        return zeroed(
            "trend_relevance",
            W_TREND,
            MetricDetail::TrendRelevance {
                source: InsightSource::Fallback,
                feedback: "no captions in sampled posts".to_string(),
            },
        );
    }

    let insight = gate
        .fetch(
            "trend_relevance",
            snapshot,
            |cache| Some(cache.trend_relevance),
            || async {
                gate.provider()
                    .analyze_trend_relevance(captions)
                    .await
                    .map(|t| t.score)
            },
        )
        .await;

    let (score, source, feedback) = match insight {
        Insight::Cached(s) => (s, InsightSource::Cached, "served from snapshot cache".to_string()),
        Insight::Fresh(s) => (s, InsightSource::Fresh, "freshly analyzed".to_string()),
        Insight::Unavailable => (
            DEFAULT_TREND_SCORE,
            InsightSource::Fallback,
            "trend analysis unavailable, neutral default applied".to_string(),
        ),
    };

    MetricScore {
        label: "trend_relevance",
        score: score.clamp(0.0, 10.0),
        weight: W_TREND,
        detail: MetricDetail::TrendRelevance { source, feedback },
    }
}

/// Reel share of posts in the trailing window, rewarded for balance:
/// a 60–90% reel share beats both all-reels and reel-light feeds.
fn mix_metric(ctx: &ScoringContext, window_days: i64) -> MetricScore {
    let recent = ctx.media_in_window(window_days);
    if recent.is_empty() {
        return zeroed(
            "content_mix",
            W_MIX,
            MetricDetail::ContentMix {
                posts_in_window: 0,
                reel_pct: 0.0,
                message: "No posts in last 30 days".to_string(),
            },
        );
    }

    #[allow(clippy::cast_precision_loss)]
    let total = recent.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let reels = recent
        .iter()
        .filter(|m| m.media_type == MediaType::Reel)
        .count() as f64;
    let reel_pct = reels / total * 100.0;
    let raw = REEL_MIX_RAW.score(reel_pct);

    MetricScore {
        label: "content_mix",
        score: raw / 5.0 * 10.0,
        weight: W_MIX,
        detail: MetricDetail::ContentMix {
            posts_in_window: recent.len(),
            reel_pct,
            message: format!("{reel_pct:.0}% reels across {} recent posts", recent.len()),
        },
    }
}

async fn style_metric(
    gate: &InsightGate,
    snapshot: Option<&crate::types::Snapshot>,
    media_urls: &[String],
) -> MetricScore {
    if media_urls.is_empty() {
        return zeroed(
            "content_style",
            W_STYLE,
            MetricDetail::ContentStyle {
                sampled_posts: 0,
                face_share_pct: 0.0,
                source: InsightSource::Fallback,
                message: "no media available to sample".to_string(),
            },
        );
    }

    let insight = gate
        .fetch(
            "face_detection",
            snapshot,
            |cache| Some(cache.face_share_pct),
            || async {
                gate.provider()
                    .detect_faces(media_urls)
                    .await
                    .map(|f| f.face_share_pct)
            },
        )
        .await;

    let (face_share_pct, source) = match insight {
        Insight::Cached(pct) => (pct, InsightSource::Cached),
        Insight::Fresh(pct) => (pct, InsightSource::Fresh),
        Insight::Unavailable => {
            return zeroed(
                "content_style",
                W_STYLE,
                MetricDetail::ContentStyle {
                    sampled_posts: media_urls.len(),
                    face_share_pct: 0.0,
                    source: InsightSource::Fallback,
                    message: "face detection unavailable".to_string(),
                },
            );
        }
    };

    MetricScore {
        label: "content_style",
        score: (face_share_pct / 100.0 * 10.0).clamp(0.0, 10.0),
        weight: W_STYLE,
        detail: MetricDetail::ContentStyle {
            sampled_posts: media_urls.len(),
            face_share_pct,
            source,
            message: format!("{face_share_pct:.0}% of sampled posts show a face"),
        },
    }
}

/// Share of posts above (top) or below (worst) the window's average reach,
/// banded. Posts exactly at the average count as neither.
fn performance_metric(ctx: &ScoringContext, band: PerformanceBand) -> MetricScore {
    let label = match band {
        PerformanceBand::Top => "top_performing_posts",
        PerformanceBand::Worst => "worst_performing_posts",
    };
    let weight = match band {
        PerformanceBand::Top => W_TOP_POSTS,
        PerformanceBand::Worst => W_WORST_POSTS,
    };

    let reach = ctx.reach_values();
    let Some(average) = stats::mean(&reach) else {
        return zeroed(
            label,
            weight,
            MetricDetail::PostPerformance {
                band,
                share_pct: 0.0,
                average_reach: 0.0,
                message: "no post insights in last 30 days".to_string(),
            },
        );
    };

    #[allow(clippy::cast_precision_loss)]
    let total = reach.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let hits = reach
        .iter()
        .filter(|&&r| match band {
            PerformanceBand::Top => r > average,
            PerformanceBand::Worst => r < average,
        })
        .count() as f64;
    let share_pct = hits / total * 100.0;

    let ladder = match band {
        PerformanceBand::Top => TOP_POSTS,
        PerformanceBand::Worst => WORST_POSTS,
    };
    let direction = match band {
        PerformanceBand::Top => "above",
        PerformanceBand::Worst => "below",
    };

    MetricScore {
        label,
        score: ladder.score(share_pct),
        weight,
        detail: MetricDetail::PostPerformance {
            band,
            share_pct,
            average_reach: average,
            message: format!("{share_pct:.0}% of posts {direction} average reach {average:.0}"),
        },
    }
}

async fn niche_metric(
    gate: &InsightGate,
    snapshot: Option<&crate::types::Snapshot>,
    captions: &[String],
    policy: &ScoringPolicy,
) -> MetricScore {
    if captions.is_empty() {
        return zeroed(
            "niche_match",
            W_NICHE,
            MetricDetail::NicheMatch {
                detected: vec![],
                matched: vec![],
                source: InsightSource::Fallback,
                message: "no captions in sampled posts".to_string(),
            },
        );
    }

    let insight = gate
        .fetch(
            "niche_detection",
            snapshot,
            |cache| {
                let mut all = vec![cache.primary_niche.clone()];
                all.extend(cache.secondary_niches.iter().cloned());
                Some(all)
            },
            || async {
                gate.provider()
                    .detect_niches(captions)
                    .await
                    .map(|n| n.all())
            },
        )
        .await;

    let (detected, source) = match insight {
        Insight::Cached(n) => (n, InsightSource::Cached),
        Insight::Fresh(n) => (n, InsightSource::Fresh),
        Insight::Unavailable => {
            return zeroed(
                "niche_match",
                W_NICHE,
                MetricDetail::NicheMatch {
                    detected: vec![],
                    matched: vec![],
                    source: InsightSource::Fallback,
                    message: "niche detection unavailable".to_string(),
                },
            );
        }
    };

    let matched: Vec<String> = detected
        .iter()
        .filter(|niche| {
            policy
                .top_niches
                .iter()
                .any(|top| top.eq_ignore_ascii_case(niche))
        })
        .cloned()
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let match_count = matched.len() as f64;

    MetricScore {
        label: "niche_match",
        score: NICHE_MATCHES.score(match_count),
        weight: W_NICHE,
        detail: MetricDetail::NicheMatch {
            message: format!(
                "{} of {} detected niches on the campaign list",
                matched.len(),
                detected.len()
            ),
            detected,
            matched,
            source,
        },
    }
}

async fn hashtag_metric(
    gate: &InsightGate,
    snapshot: Option<&crate::types::Snapshot>,
    captions: &[String],
) -> MetricScore {
    if captions.is_empty() {
        return zeroed(
            "hashtag_effectiveness",
            W_HASHTAG,
            MetricDetail::HashtagEffectiveness {
                rating: None,
                source: InsightSource::Fallback,
                message: "no captions in sampled posts".to_string(),
            },
        );
    }

    let insight = gate
        .fetch(
            "hashtag_rating",
            snapshot,
            |cache| Some(cache.hashtag_rating),
            || async {
                gate.provider()
                    .rate_hashtags(captions)
                    .await
                    .map(|h| h.rating)
            },
        )
        .await;

    let (rating, source) = match insight {
        Insight::Cached(r) => (r, InsightSource::Cached),
        Insight::Fresh(r) => (r, InsightSource::Fresh),
        Insight::Unavailable => {
            return zeroed(
                "hashtag_effectiveness",
                W_HASHTAG,
                MetricDetail::HashtagEffectiveness {
                    rating: None,
                    source: InsightSource::Fallback,
                    message: "hashtag analysis unavailable".to_string(),
                },
            );
        }
    };

    MetricScore {
        label: "hashtag_effectiveness",
        score: hashtag_score(rating),
        weight: W_HASHTAG,
        detail: MetricDetail::HashtagEffectiveness {
            rating: Some(rating),
            source,
            message: format!("hashtags rated {rating:?}"),
        },
    }
}

#[must_use]
pub fn hashtag_score(rating: HashtagRating) -> f64 {
    match rating {
        HashtagRating::Outperforming => 10.0,
        HashtagRating::Effective => 8.0,
        HashtagRating::Medium => 5.0,
        HashtagRating::NeedImprovement => 2.0,
    }
}

async fn language_metric(
    gate: &InsightGate,
    snapshot: Option<&crate::types::Snapshot>,
    captions: &[String],
    policy: &ScoringPolicy,
) -> MetricScore {
    if captions.is_empty() {
        return zeroed(
            "language_fit",
            W_LANGUAGE,
            MetricDetail::LanguageFit {
                target_languages: policy.target_languages.clone(),
                caption_share_pct: 0.0,
                source: InsightSource::Fallback,
                message: "no captions in sampled posts".to_string(),
            },
        );
    }

    let insight = gate
        .fetch(
            "language_mix",
            snapshot,
            |cache| Some(cache.language_mix.clone()),
            || async {
                gate.provider()
                    .analyze_language_mix(captions)
                    .await
                    .map(|l| l.languages)
            },
        )
        .await;

    let (languages, source) = match insight {
        Insight::Cached(l) => (l, InsightSource::Cached),
        Insight::Fresh(l) => (l, InsightSource::Fresh),
        Insight::Unavailable => {
            return zeroed(
                "language_fit",
                W_LANGUAGE,
                MetricDetail::LanguageFit {
                    target_languages: policy.target_languages.clone(),
                    caption_share_pct: 0.0,
                    source: InsightSource::Fallback,
                    message: "language analysis unavailable".to_string(),
                },
            );
        }
    };

    let caption_share_pct: f64 = languages
        .iter()
        .filter(|share| {
            policy
                .target_languages
                .iter()
                .any(|lang| lang.eq_ignore_ascii_case(&share.label))
        })
        .map(|share| share.pct)
        .sum();

    MetricScore {
        label: "language_fit",
        score: (caption_share_pct / 100.0 * 10.0).clamp(0.0, 10.0),
        weight: W_LANGUAGE,
        detail: MetricDetail::LanguageFit {
            target_languages: policy.target_languages.clone(),
            caption_share_pct,
            source,
            message: format!("{caption_share_pct:.0}% of captions in target languages"),
        },
    }
}

fn zeroed(label: &'static str, weight: u32, detail: MetricDetail) -> MetricScore {
    MetricScore {
        label,
        score: 0.0,
        weight,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctx_empty, ctx_with_media, media_item, policy};

    #[test]
    fn weights_sum_to_100() {
        let sum = W_TREND
            + W_MIX
            + W_STYLE
            + W_TOP_POSTS
            + W_WORST_POSTS
            + W_NICHE
            + W_HASHTAG
            + W_LANGUAGE;
        assert_eq!(sum, 100, "weights must sum to 100, got {sum}");
    }

    #[test]
    fn mix_zero_without_posts_carries_exact_message() {
        let ctx = ctx_empty();
        let metric = mix_metric(&ctx, 30);
        assert!(metric.score.abs() < 1e-9);
        match metric.detail {
            MetricDetail::ContentMix { ref message, .. } => {
                assert_eq!(message, "No posts in last 30 days");
            }
            ref other => panic!("unexpected detail: {other:?}"),
        }
    }

    #[test]
    fn mix_balanced_reel_share_scores_full() {
        // 15 reels out of 20 posts = 75%, the rewarded 60–90 band:
        // raw 5 => (5/5)*10 = 10.0.
        let mut media = Vec::new();
        for i in 0..20 {
            let media_type = if i < 15 {
                MediaType::Reel
            } else {
                MediaType::Image
            };
            media.push(media_item(media_type, Some("caption"), 1));
        }
        let ctx = ctx_with_media(media);
        let metric = mix_metric(&ctx, 30);
        assert!((metric.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn mix_all_reels_is_penalised() {
        let media = (0..10)
            .map(|_| media_item(MediaType::Reel, Some("caption"), 1))
            .collect();
        let ctx = ctx_with_media(media);
        let metric = mix_metric(&ctx, 30);
        // raw 2 => 4.0
        assert!((metric.score - 4.0).abs() < 1e-9);
    }

    #[test]
    fn performance_zero_without_insights() {
        let ctx = ctx_empty();
        let top = performance_metric(&ctx, PerformanceBand::Top);
        let worst = performance_metric(&ctx, PerformanceBand::Worst);
        assert!(top.score.abs() < 1e-9);
        assert!(worst.score.abs() < 1e-9);
    }

    #[test]
    fn hashtag_lookup_is_fixed() {
        assert!((hashtag_score(HashtagRating::Outperforming) - 10.0).abs() < 1e-9);
        assert!((hashtag_score(HashtagRating::Effective) - 8.0).abs() < 1e-9);
        assert!((hashtag_score(HashtagRating::Medium) - 5.0).abs() < 1e-9);
        assert!((hashtag_score(HashtagRating::NeedImprovement) - 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn all_metrics_zero_for_empty_profile() {
        // With no media at all, data metrics zero out and trend takes its
        // documented no-caption zero as well; weights stay in place.
        let ctx = ctx_empty();
        let gate = crate::testutil::unavailable_gate();
        let category = score(&ctx, &gate, &policy()).await;
        assert_eq!(category.breakdown.len(), 8);
        assert!(category.score.abs() < 1e-9);
        let weight_sum: u32 = category.breakdown.iter().map(|m| m.weight).sum();
        assert_eq!(weight_sum, 100);
    }
}
