//! Score report types returned to callers.
//!
//! Every breakdown entry carries a [`MetricDetail`] variant so the shape of
//! each sub-metric's explanation is statically known -- consumers never have
//! to sniff loosely-typed payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{CtaRating, HashtagRating};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AudienceQuality,
    ContentRelevance,
    ContentQuality,
    EngagementStrength,
    GrowthMomentum,
    Monetisation,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::AudienceQuality,
        Category::ContentRelevance,
        Category::ContentQuality,
        Category::EngagementStrength,
        Category::GrowthMomentum,
        Category::Monetisation,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::AudienceQuality => "Audience Quality",
            Category::ContentRelevance => "Content Relevance",
            Category::ContentQuality => "Content Quality",
            Category::EngagementStrength => "Engagement Strength",
            Category::GrowthMomentum => "Growth Momentum",
            Category::Monetisation => "Monetisation",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "audience_quality" | "audience" => Ok(Category::AudienceQuality),
            "content_relevance" | "relevance" => Ok(Category::ContentRelevance),
            "content_quality" | "quality" => Ok(Category::ContentQuality),
            "engagement_strength" | "engagement" => Ok(Category::EngagementStrength),
            "growth_momentum" | "growth" => Ok(Category::GrowthMomentum),
            "monetisation" | "monetization" => Ok(Category::Monetisation),
            other => Err(format!("unknown category: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Strong,
    Good,
    Average,
    Weak,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Strong => write!(f, "Strong"),
            Grade::Good => write!(f, "Good"),
            Grade::Average => write!(f, "Average"),
            Grade::Weak => write!(f, "Weak"),
        }
    }
}

/// Where a sub-metric's AI judgment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    /// Reused from the snapshot's insight cache.
    Cached,
    /// Computed by the provider for this request.
    Fresh,
    /// Provider unavailable or failed; documented default applied.
    Fallback,
}

/// One weighted sub-metric inside a category breakdown.
///
/// `score` is on the internal 0–10 scale; `weight` is the fixed percentage
/// contribution within the category (weights per category sum to 100).
#[derive(Debug, Clone, Serialize)]
pub struct MetricScore {
    pub label: &'static str,
    pub score: f64,
    pub weight: u32,
    pub detail: MetricDetail,
}

impl MetricScore {
    /// Contribution of this metric to the category score on the 0–10 scale.
    #[must_use]
    pub fn weighted(&self) -> f64 {
        self.score * f64::from(self.weight) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceBand {
    Top,
    Worst,
}

/// Statically-typed explanation payload for each sub-metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricDetail {
    FollowerAuthenticity {
        authenticity_pct: Option<f64>,
        message: String,
    },
    DemographicsStability {
        snapshots_compared: usize,
        variance_index: Option<f64>,
        message: String,
    },
    GeoRelevance {
        target_country: String,
        audience_share_pct: f64,
        message: String,
    },
    TrendRelevance {
        source: InsightSource,
        feedback: String,
    },
    ContentMix {
        posts_in_window: usize,
        reel_pct: f64,
        message: String,
    },
    ContentStyle {
        sampled_posts: usize,
        face_share_pct: f64,
        source: InsightSource,
        message: String,
    },
    PostPerformance {
        band: PerformanceBand,
        share_pct: f64,
        average_reach: f64,
        message: String,
    },
    NicheMatch {
        detected: Vec<String>,
        matched: Vec<String>,
        source: InsightSource,
        message: String,
    },
    HashtagEffectiveness {
        rating: Option<HashtagRating>,
        source: InsightSource,
        message: String,
    },
    LanguageFit {
        target_languages: Vec<String>,
        caption_share_pct: f64,
        source: InsightSource,
        message: String,
    },
    VisualQuality {
        lighting: f64,
        editing: f64,
        aesthetics: f64,
        source: InsightSource,
    },
    Consistency {
        raw_score: f64,
        source: InsightSource,
    },
    CaptionSentiment {
        sentiment: f64,
        positive_pct: f64,
        source: InsightSource,
    },
    CtaUsage {
        rating: Option<CtaRating>,
        source: InsightSource,
    },
    EngagementOverview {
        rate_pct: f64,
        benchmark_pct: f64,
        message: String,
    },
    PerformanceConsistency {
        posts: usize,
        coefficient_of_variation: Option<f64>,
        message: String,
    },
    GrowthTrend {
        data_points: usize,
        growth_pct: Option<f64>,
        message: String,
    },
    PostingBehaviour {
        posts_per_week: f64,
        message: String,
    },
    MonetisationPotential {
        rating: Option<f64>,
        source: InsightSource,
        feedback: String,
    },
    BrandTrust {
        payout_estimate: Option<f64>,
        source: InsightSource,
    },
    AudienceSentiment {
        rating: Option<f64>,
        source: InsightSource,
    },
}

/// One of the six top-level scoring dimensions, scaled to 0–100 for
/// presentation.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    /// 0–100; the weighted sub-metric sum on the 0–10 scale, ×10.
    pub score: f64,
    pub breakdown: Vec<MetricScore>,
    /// UI hint set by the audience calculator: a linked business page means
    /// the demographic data is first-party. Not part of the score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_page_connected: Option<bool>,
}

impl CategoryScore {
    /// Build a category score from its weighted breakdown (0–10 scale ×10).
    #[must_use]
    pub fn from_breakdown(category: Category, breakdown: Vec<MetricScore>) -> Self {
        let internal: f64 = breakdown.iter().map(MetricScore::weighted).sum();
        Self {
            category,
            score: (internal * 10.0).clamp(0.0, 100.0),
            breakdown,
            facebook_page_connected: None,
        }
    }
}

/// The aggregate scoring report for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileScoreReport {
    pub profile_id: Uuid,
    pub handle: String,
    pub computed_at: DateTime<Utc>,
    /// Arithmetic mean of the six category scores, 0–100.
    pub composite: f64,
    pub grade: Grade,
    /// Week-over-week composite delta. Always 0.0 until a score-history
    /// store exists to diff against.
    pub weekly_delta: f64,
    pub categories: Vec<CategoryScore>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_aliases() {
        assert_eq!(
            "audience".parse::<Category>().unwrap(),
            Category::AudienceQuality
        );
        assert_eq!(
            "growth-momentum".parse::<Category>().unwrap(),
            Category::GrowthMomentum
        );
        assert_eq!(
            "monetization".parse::<Category>().unwrap(),
            Category::Monetisation
        );
        assert!("nonsense".parse::<Category>().is_err());
    }

    #[test]
    fn from_breakdown_weights_and_scales() {
        let breakdown = vec![
            MetricScore {
                label: "a",
                score: 10.0,
                weight: 50,
                detail: MetricDetail::PostingBehaviour {
                    posts_per_week: 6.0,
                    message: String::new(),
                },
            },
            MetricScore {
                label: "b",
                score: 5.0,
                weight: 50,
                detail: MetricDetail::PostingBehaviour {
                    posts_per_week: 2.0,
                    message: String::new(),
                },
            },
        ];
        let cat = CategoryScore::from_breakdown(Category::GrowthMomentum, breakdown);
        // (10*0.5 + 5*0.5) * 10 = 75
        assert!((cat.score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn metric_detail_serializes_tagged() {
        let detail = MetricDetail::GrowthTrend {
            data_points: 2,
            growth_pct: Some(27.0),
            message: "growing".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "growth_trend");
        assert_eq!(json["data_points"], 2);
    }
}
