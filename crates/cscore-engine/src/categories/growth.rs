//! Category 5 -- Growth Momentum.
//!
//! Follower growth across the observation window and posting cadence, both
//! tier-converted. Growth with fewer than two data points scores a neutral
//! 5.0 -- a brand-new profile is neither rewarded nor punished.

use cscore_core::ScoringPolicy;

use crate::report::{Category, CategoryScore, MetricDetail, MetricScore};
use crate::signals::ScoringContext;
use crate::tiers::{GROWTH_TREND, POSTING_CADENCE};

pub const W_TREND: u32 = 60;
pub const W_POSTING: u32 = 40;

const _: () = assert!(
    W_TREND + W_POSTING == 100,
    "growth weights must sum to exactly 100"
);

/// Neutral score when the window holds fewer than two growth points.
const NEUTRAL_TREND_SCORE: f64 = 5.0;

#[must_use]
pub fn score(ctx: &ScoringContext, policy: &ScoringPolicy) -> CategoryScore {
    let breakdown = vec![
        trend_metric(ctx),
        posting_metric(ctx, policy.insight_window_days),
    ];
    CategoryScore::from_breakdown(Category::GrowthMomentum, breakdown)
}

fn trend_metric(ctx: &ScoringContext) -> MetricScore {
    let points = &ctx.growth;

    let (oldest, newest) = match (points.first(), points.last()) {
        (Some(oldest), Some(newest)) if points.len() >= 2 => (oldest, newest),
        _ => {
            return MetricScore {
                label: "growth_trend",
                score: NEUTRAL_TREND_SCORE,
                weight: W_TREND,
                detail: MetricDetail::GrowthTrend {
                    data_points: points.len(),
                    growth_pct: None,
                    message: "not enough growth history to assess, neutral score".to_string(),
                },
            };
        }
    };

    if oldest.follower_count <= 0 {
        return MetricScore {
            label: "growth_trend",
            score: NEUTRAL_TREND_SCORE,
            weight: W_TREND,
            detail: MetricDetail::GrowthTrend {
                data_points: points.len(),
                growth_pct: None,
                message: "window starts at zero followers, neutral score".to_string(),
            },
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let growth_pct = (newest.follower_count - oldest.follower_count) as f64
        / oldest.follower_count as f64
        * 100.0;

    MetricScore {
        label: "growth_trend",
        score: GROWTH_TREND.score(growth_pct),
        weight: W_TREND,
        detail: MetricDetail::GrowthTrend {
            data_points: points.len(),
            growth_pct: Some(growth_pct),
            message: format!(
                "{growth_pct:+.1}% followers over {} data points",
                points.len()
            ),
        },
    }
}

fn posting_metric(ctx: &ScoringContext, window_days: i64) -> MetricScore {
    let posts = ctx.media_in_window(window_days).len();
    #[allow(clippy::cast_precision_loss)]
    let posts_per_week = posts as f64 / (window_days as f64 / 7.0);

    MetricScore {
        label: "posting_behaviour",
        score: POSTING_CADENCE.score(posts_per_week),
        weight: W_POSTING,
        detail: MetricDetail::PostingBehaviour {
            posts_per_week,
            message: format!("{posts_per_week:.1} posts per week"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctx_empty, ctx_with_growth, ctx_with_media, media_item, policy};
    use crate::types::MediaType;

    #[test]
    fn weights_sum_to_100() {
        assert_eq!(W_TREND + W_POSTING, 100);
    }

    #[test]
    fn trend_neutral_without_history() {
        let metric = trend_metric(&ctx_empty());
        assert!((metric.score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn trend_neutral_with_single_point() {
        let ctx = ctx_with_growth(&[1_000]);
        let metric = trend_metric(&ctx);
        assert!((metric.score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn trend_maps_27_pct_growth_to_its_band() {
        // 27% growth lands in the 25–30 band => 8.33.
        let ctx = ctx_with_growth(&[10_000, 12_700]);
        let metric = trend_metric(&ctx);
        assert!((metric.score - 8.33).abs() < 1e-9);
        match metric.detail {
            MetricDetail::GrowthTrend { growth_pct, .. } => {
                assert!((growth_pct.unwrap() - 27.0).abs() < 1e-9);
            }
            ref other => panic!("unexpected detail: {other:?}"),
        }
    }

    #[test]
    fn trend_zero_for_shrinking_profile() {
        let ctx = ctx_with_growth(&[10_000, 9_000]);
        let metric = trend_metric(&ctx);
        assert!(metric.score.abs() < 1e-9);
    }

    #[test]
    fn trend_neutral_when_window_starts_at_zero() {
        let ctx = ctx_with_growth(&[0, 500]);
        let metric = trend_metric(&ctx);
        assert!((metric.score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn posting_six_per_week_scores_full() {
        // 26 posts over a 30-day window is just above 6/week.
        let media = (0..26)
            .map(|_| media_item(MediaType::Image, None, 3))
            .collect();
        let ctx = ctx_with_media(media);
        let metric = posting_metric(&ctx, 30);
        assert!((metric.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn posting_idle_profile_scores_floor() {
        let metric = posting_metric(&ctx_empty(), 30);
        assert!((metric.score - 2.86).abs() < 1e-9);
    }

    #[test]
    fn category_is_neutral_for_empty_profile() {
        let category = score(&ctx_empty(), &policy());
        // trend 5.0 * 0.6 + cadence 2.86 * 0.4 = 4.144 => 41.44
        assert!((category.score - 41.44).abs() < 1e-6);
    }
}
