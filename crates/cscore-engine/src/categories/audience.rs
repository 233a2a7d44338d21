//! Category 1 -- Audience Quality.
//!
//! Follower authenticity, demographic stability across snapshots, and
//! audience share in the campaign's target country. No AI involvement;
//! everything derives from platform-reported demographics.

use std::collections::BTreeMap;

use cscore_core::ScoringPolicy;

use crate::report::{Category, CategoryScore, MetricDetail, MetricScore};
use crate::signals::ScoringContext;
use crate::stats;
use crate::types::Demographics;

pub const W_AUTHENTICITY: u32 = 65;
pub const W_DEMOGRAPHICS: u32 = 20;
pub const W_GEO: u32 = 15;

const _: () = assert!(
    W_AUTHENTICITY + W_DEMOGRAPHICS + W_GEO == 100,
    "audience weights must sum to exactly 100"
);

/// Authenticity share at which a profile earns the full score.
const FULL_AUTHENTICITY_PCT: f64 = 25.0;

/// Minimum demographic snapshots before stability can be judged.
const MIN_STABILITY_SNAPSHOTS: usize = 2;

#[must_use]
pub fn score(ctx: &ScoringContext, policy: &ScoringPolicy) -> CategoryScore {
    let demographics = ctx
        .snapshot
        .as_ref()
        .and_then(|s| s.demographics.as_ref());

    let breakdown = vec![
        authenticity_metric(demographics),
        stability_metric(&ctx.demographic_history),
        geo_metric(demographics, ctx.target_country(&policy.target_country)),
    ];

    let mut category = CategoryScore::from_breakdown(Category::AudienceQuality, breakdown);
    category.facebook_page_connected = Some(demographics.is_some_and(|d| d.business_page_linked));
    category
}

/// Follower authenticity. When the platform cannot report authenticity at
/// all, absence of negative evidence scores as full trust.
fn authenticity_metric(demographics: Option<&Demographics>) -> MetricScore {
    let authenticity_pct = demographics.and_then(|d| d.authenticity_pct);
    let (score, message) = match authenticity_pct {
        Some(pct) => (
            (pct / FULL_AUTHENTICITY_PCT * 10.0).min(10.0),
            format!("{pct:.1}% of followers classified as active"),
        ),
        None => (
            10.0,
            "authenticity not reported by the platform, no negative evidence".to_string(),
        ),
    };

    MetricScore {
        label: "follower_authenticity",
        score,
        weight: W_AUTHENTICITY,
        detail: MetricDetail::FollowerAuthenticity {
            authenticity_pct,
            message,
        },
    }
}

/// Demographic stability across historical snapshots. A new profile with
/// fewer than two demographic captures cannot be penalised yet.
fn stability_metric(history: &[Demographics]) -> MetricScore {
    if history.len() < MIN_STABILITY_SNAPSHOTS {
        return MetricScore {
            label: "demographics_stability",
            score: 10.0,
            weight: W_DEMOGRAPHICS,
            detail: MetricDetail::DemographicsStability {
                snapshots_compared: history.len(),
                variance_index: None,
                message: "not enough demographic history to assess, full score".to_string(),
            },
        };
    }

    let variance_index = variance_index(history);
    let score = (1.0 - variance_index) * 10.0;

    MetricScore {
        label: "demographics_stability",
        score,
        weight: W_DEMOGRAPHICS,
        detail: MetricDetail::DemographicsStability {
            snapshots_compared: history.len(),
            variance_index: Some(variance_index),
            message: format!(
                "audience composition variance index {variance_index:.2} over {} snapshots",
                history.len()
            ),
        },
    }
}

/// Average normalized per-segment variance across the demographic history,
/// in `[0, 1]`. Lower means a steadier audience.
fn variance_index(history: &[Demographics]) -> f64 {
    // Union of segment labels across all snapshots; a segment missing from
    // one snapshot contributes 0% there, which correctly reads as churn.
    let mut series: BTreeMap<(&'static str, String), Vec<f64>> = BTreeMap::new();
    for demo in history {
        for share in &demo.age_buckets {
            series.entry(("age", share.label.clone())).or_default();
        }
        for share in &demo.gender_split {
            series.entry(("gender", share.label.clone())).or_default();
        }
    }

    for demo in history {
        for ((dimension, label), values) in &mut series {
            let shares = match *dimension {
                "age" => &demo.age_buckets,
                _ => &demo.gender_split,
            };
            let pct = shares
                .iter()
                .find(|s| s.label == *label)
                .map_or(0.0, |s| s.pct);
            values.push(pct);
        }
    }

    let normalized: Vec<f64> = series
        .values()
        .filter_map(|values| stats::population_std_dev(values))
        .map(|sd| (sd / 10.0).min(1.0))
        .collect();

    stats::mean(&normalized).unwrap_or(0.0)
}

/// Share of the audience in the campaign's target country.
fn geo_metric(demographics: Option<&Demographics>, target_country: &str) -> MetricScore {
    let share_pct = demographics
        .map(|d| {
            d.countries
                .iter()
                .find(|c| c.label.eq_ignore_ascii_case(target_country))
                .map_or(0.0, |c| c.pct)
        })
        .unwrap_or(0.0);

    let has_geo_data = demographics.is_some_and(|d| !d.countries.is_empty());
    let (score, message) = if has_geo_data {
        (
            (share_pct / 100.0 * 10.0).clamp(0.0, 10.0),
            format!("{share_pct:.1}% of audience in {target_country}"),
        )
    } else {
        (0.0, "no geographic audience data".to_string())
    };

    MetricScore {
        label: "geo_relevance",
        score,
        weight: W_GEO,
        detail: MetricDetail::GeoRelevance {
            target_country: target_country.to_string(),
            audience_share_pct: share_pct,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctx_with_snapshot, demographics, policy, snapshot};

    #[test]
    fn weights_sum_to_100() {
        assert_eq!(W_AUTHENTICITY + W_DEMOGRAPHICS + W_GEO, 100);
    }

    #[test]
    fn missing_authenticity_scores_full_trust() {
        let metric = authenticity_metric(None);
        assert!((metric.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn authenticity_scales_to_benchmark() {
        let demo = demographics(Some(12.5), &[], &[]);
        let metric = authenticity_metric(Some(&demo));
        // 12.5 / 25 * 10 = 5.0
        assert!((metric.score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn authenticity_caps_at_ten() {
        let demo = demographics(Some(60.0), &[], &[]);
        let metric = authenticity_metric(Some(&demo));
        assert!((metric.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn stability_full_score_with_single_snapshot() {
        let history = vec![demographics(
            None,
            &[("18-24", 40.0), ("25-34", 60.0)],
            &[],
        )];
        let metric = stability_metric(&history);
        assert!((metric.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn stability_perfect_for_identical_history() {
        let demo = demographics(None, &[("18-24", 40.0), ("25-34", 60.0)], &[]);
        let metric = stability_metric(&[demo.clone(), demo]);
        assert!((metric.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn stability_penalises_churn() {
        let a = demographics(None, &[("18-24", 80.0), ("25-34", 20.0)], &[]);
        let b = demographics(None, &[("18-24", 20.0), ("25-34", 80.0)], &[]);
        let metric = stability_metric(&[a, b]);
        // Each segment swings ±30 around its mean: sd 30, normalized capped
        // at 1, so the variance index maxes out and the score bottoms out.
        assert!(metric.score.abs() < 1e-9);
    }

    #[test]
    fn geo_zero_without_data() {
        let metric = geo_metric(None, "DE");
        assert!(metric.score.abs() < 1e-9);
    }

    #[test]
    fn geo_scales_with_target_share() {
        let demo = demographics(None, &[], &[("DE", 45.0), ("AT", 20.0)]);
        let metric = geo_metric(Some(&demo), "DE");
        assert!((metric.score - 4.5).abs() < 1e-9);
    }

    #[test]
    fn geo_matches_country_case_insensitively() {
        let demo = demographics(None, &[], &[("de", 30.0)]);
        let metric = geo_metric(Some(&demo), "DE");
        assert!((metric.score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn category_reports_business_page_hint() {
        let mut snap = snapshot(20);
        let mut demo = demographics(Some(30.0), &[("18-24", 50.0)], &[("DE", 50.0)]);
        demo.business_page_linked = true;
        snap.demographics = Some(demo);
        let ctx = ctx_with_snapshot(snap);

        let category = score(&ctx, &policy());
        assert_eq!(category.facebook_page_connected, Some(true));
        assert_eq!(category.category, Category::AudienceQuality);
    }
}
