use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Market- and campaign-level scoring parameters.
///
/// Loaded from a YAML file so brand teams can retune the target market and
/// niche allow-list without a rebuild. Formula weights and tier tables are
/// deliberately NOT configurable here; they are fixed constants in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// ISO country code the campaign targets (e.g. `"DE"`).
    pub target_country: String,
    /// Lowercase ISO language codes counted as market-fit captions.
    pub target_languages: Vec<String>,
    /// Niches a brand considers high-value; niche-match scoring counts
    /// intersections with this list.
    pub top_niches: Vec<String>,
    /// Engagement-rate benchmark in percent. A profile at this rate earns a
    /// full engagement-overview score.
    #[serde(default = "default_engagement_benchmark")]
    pub engagement_benchmark_pct: f64,
    /// How many recent posts are sampled for caption/visual analysis.
    #[serde(default = "default_media_sample_limit")]
    pub media_sample_limit: usize,
    /// Trailing window for per-post insight metrics, in days.
    #[serde(default = "default_insight_window_days")]
    pub insight_window_days: i64,
    /// Trailing window for follower-growth points, in days.
    #[serde(default = "default_growth_window_days")]
    pub growth_window_days: i64,
    /// How many historical snapshots are inspected for demographic stability.
    #[serde(default = "default_demographic_history_limit")]
    pub demographic_history_limit: usize,
}

fn default_engagement_benchmark() -> f64 {
    3.0
}

fn default_media_sample_limit() -> usize {
    20
}

fn default_insight_window_days() -> i64 {
    30
}

fn default_growth_window_days() -> i64 {
    60
}

fn default_demographic_history_limit() -> usize {
    12
}

/// Load and validate the scoring policy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_policy(path: &Path) -> Result<ScoringPolicy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PolicyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let policy: ScoringPolicy = serde_yaml::from_str(&content)?;

    validate_policy(&policy)?;

    Ok(policy)
}

fn validate_policy(policy: &ScoringPolicy) -> Result<(), ConfigError> {
    if policy.target_country.trim().is_empty() {
        return Err(ConfigError::Validation(
            "target_country must be non-empty".to_string(),
        ));
    }

    if policy.target_languages.is_empty() {
        return Err(ConfigError::Validation(
            "target_languages must list at least one language".to_string(),
        ));
    }

    if policy.top_niches.is_empty() {
        return Err(ConfigError::Validation(
            "top_niches must list at least one niche".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for niche in &policy.top_niches {
        if !seen.insert(niche.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate niche in top_niches: '{niche}'"
            )));
        }
    }

    if policy.engagement_benchmark_pct <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "engagement_benchmark_pct must be positive, got {}",
            policy.engagement_benchmark_pct
        )));
    }

    if policy.insight_window_days <= 0 || policy.growth_window_days <= 0 {
        return Err(ConfigError::Validation(
            "insight_window_days and growth_window_days must be positive".to_string(),
        ));
    }

    Ok(())
}
