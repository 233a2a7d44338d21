//! Category 4 -- Engagement Strength.
//!
//! Two sub-metrics: the stored average engagement rate against a fixed
//! benchmark, and reach consistency across the recent insight window.

use cscore_core::ScoringPolicy;

use crate::report::{Category, CategoryScore, MetricDetail, MetricScore};
use crate::signals::ScoringContext;
use crate::stats;

pub const W_OVERVIEW: u32 = 70;
pub const W_CONSISTENCY: u32 = 30;

const _: () = assert!(
    W_OVERVIEW + W_CONSISTENCY == 100,
    "engagement weights must sum to exactly 100"
);

/// Posts needed in the window before reach consistency is judged.
const MIN_POSTS_FOR_CONSISTENCY: usize = 5;

#[must_use]
pub fn score(ctx: &ScoringContext, policy: &ScoringPolicy) -> CategoryScore {
    let breakdown = vec![
        overview_metric(ctx, policy.engagement_benchmark_pct),
        consistency_metric(ctx),
    ];
    CategoryScore::from_breakdown(Category::EngagementStrength, breakdown)
}

/// Stored average engagement rate relative to the benchmark, capped at a
/// full score -- a profile at or above the benchmark rate earns 10.
fn overview_metric(ctx: &ScoringContext, benchmark_pct: f64) -> MetricScore {
    let Some(snapshot) = ctx.snapshot.as_ref() else {
        return MetricScore {
            label: "engagement_overview",
            score: 0.0,
            weight: W_OVERVIEW,
            detail: MetricDetail::EngagementOverview {
                rate_pct: 0.0,
                benchmark_pct,
                message: "no snapshot with engagement data".to_string(),
            },
        };
    };

    let rate_pct = snapshot.avg_engagement_rate;
    let score = (rate_pct / benchmark_pct * 10.0).clamp(0.0, 10.0);

    MetricScore {
        label: "engagement_overview",
        score,
        weight: W_OVERVIEW,
        detail: MetricDetail::EngagementOverview {
            rate_pct,
            benchmark_pct,
            message: format!("{rate_pct:.2}% engagement vs {benchmark_pct:.1}% benchmark"),
        },
    }
}

/// Coefficient of variation of windowed reach, converted via `1/(1+CV)×10`.
/// A steady reach series (CV 0) scores a clean 10.
fn consistency_metric(ctx: &ScoringContext) -> MetricScore {
    let reach = ctx.reach_values();

    if reach.len() < MIN_POSTS_FOR_CONSISTENCY {
        return MetricScore {
            label: "performance_consistency",
            score: 0.0,
            weight: W_CONSISTENCY,
            detail: MetricDetail::PerformanceConsistency {
                posts: reach.len(),
                coefficient_of_variation: None,
                message: format!(
                    "needs at least {MIN_POSTS_FOR_CONSISTENCY} recent posts with insights, found {}",
                    reach.len()
                ),
            },
        };
    }

    let Some(cv) = stats::coefficient_of_variation(&reach) else {
        return MetricScore {
            label: "performance_consistency",
            score: 0.0,
            weight: W_CONSISTENCY,
            detail: MetricDetail::PerformanceConsistency {
                posts: reach.len(),
                coefficient_of_variation: None,
                message: "reach series has no usable mean".to_string(),
            },
        };
    };

    MetricScore {
        label: "performance_consistency",
        score: 1.0 / (1.0 + cv) * 10.0,
        weight: W_CONSISTENCY,
        detail: MetricDetail::PerformanceConsistency {
            posts: reach.len(),
            coefficient_of_variation: Some(cv),
            message: format!("reach variation coefficient {cv:.2} across {} posts", reach.len()),
        },
    }
}
