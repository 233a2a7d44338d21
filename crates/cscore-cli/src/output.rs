//! Terminal rendering of score reports.

use cscore_engine::report::{CategoryScore, MetricDetail, ProfileScoreReport};
use cscore_engine::types::Profile;

/// Print the full report, human-formatted or as JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn print_report(report: &ProfileScoreReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "@{} scored {:.1}/100 ({})",
        report.handle, report.composite, report.grade
    );
    println!();
    for category in &report.categories {
        print_category_block(category);
    }
    println!("{}", report.summary);
    Ok(())
}

/// Print a single category, human-formatted or as JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn print_category(category: &CategoryScore, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(category)?);
        return Ok(());
    }
    print_category_block(category);
    Ok(())
}

pub fn print_profiles(profiles: &[Profile]) {
    for profile in profiles {
        println!(
            "{}  @{:<24} {:>9} followers",
            profile.id, profile.handle, profile.follower_count
        );
    }
}

fn print_category_block(category: &CategoryScore) {
    println!("{:<22} {:>5.1}", category.category.to_string(), category.score);
    for metric in &category.breakdown {
        let note = detail_note(&metric.detail);
        println!(
            "  {:<26} {:>4.1}  ({}%)  {}",
            metric.label, metric.score, metric.weight, note
        );
    }
    if category.facebook_page_connected == Some(true) {
        println!("  (first-party demographics via linked business page)");
    }
    println!();
}

/// One-line explanation for a sub-metric, pulled from its detail payload.
fn detail_note(detail: &MetricDetail) -> String {
    match detail {
        MetricDetail::FollowerAuthenticity { message, .. }
        | MetricDetail::DemographicsStability { message, .. }
        | MetricDetail::GeoRelevance { message, .. }
        | MetricDetail::ContentMix { message, .. }
        | MetricDetail::ContentStyle { message, .. }
        | MetricDetail::PostPerformance { message, .. }
        | MetricDetail::NicheMatch { message, .. }
        | MetricDetail::HashtagEffectiveness { message, .. }
        | MetricDetail::LanguageFit { message, .. }
        | MetricDetail::EngagementOverview { message, .. }
        | MetricDetail::PerformanceConsistency { message, .. }
        | MetricDetail::GrowthTrend { message, .. }
        | MetricDetail::PostingBehaviour { message, .. } => message.clone(),
        MetricDetail::TrendRelevance { feedback, .. }
        | MetricDetail::MonetisationPotential { feedback, .. } => feedback.clone(),
        MetricDetail::VisualQuality {
            lighting,
            editing,
            aesthetics,
            ..
        } => format!("lighting {lighting:.1} / editing {editing:.1} / aesthetics {aesthetics:.1}"),
        MetricDetail::Consistency { raw_score, .. } => format!("raw {raw_score:.1}/20"),
        MetricDetail::CaptionSentiment { positive_pct, .. } => {
            format!("{positive_pct:.0}% positive")
        }
        MetricDetail::CtaUsage { rating, .. } => rating
            .map_or_else(|| "no judgment".to_string(), |r| format!("rated {r:?}")),
        MetricDetail::BrandTrust {
            payout_estimate, ..
        } => payout_estimate.map_or_else(
            || "no estimate".to_string(),
            |p| format!("payout estimate {p:.0}"),
        ),
        MetricDetail::AudienceSentiment { rating, .. } => rating.map_or_else(
            || "no judgment".to_string(),
            |r| format!("rated {r:.0}/20"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use cscore_engine::report::InsightSource;

    use super::*;

    #[test]
    fn detail_note_prefers_message_fields() {
        let detail = MetricDetail::GrowthTrend {
            data_points: 4,
            growth_pct: Some(12.0),
            message: "+12.0% followers".to_string(),
        };
        assert_eq!(detail_note(&detail), "+12.0% followers");
    }

    #[test]
    fn detail_note_formats_visual_axes() {
        let detail = MetricDetail::VisualQuality {
            lighting: 9.0,
            editing: 8.0,
            aesthetics: 7.0,
            source: InsightSource::Fresh,
        };
        assert_eq!(
            detail_note(&detail),
            "lighting 9.0 / editing 8.0 / aesthetics 7.0"
        );
    }
}
