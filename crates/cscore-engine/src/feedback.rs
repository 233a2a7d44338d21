//! Turns the computed numbers into a short human-readable summary.
//!
//! Everything here is a pure function of the report figures (plus the
//! coaching strings cached on the snapshot), so two runs over the same
//! inputs produce identical prose.

use crate::report::{CategoryScore, Grade};
use crate::signals::ScoringContext;

/// Build the report summary: overall standing, the standout category, the
/// biggest opportunity, and any cached coaching notes from the last sync.
#[must_use]
pub fn summarise(
    ctx: &ScoringContext,
    categories: &[CategoryScore],
    composite: f64,
    grade: Grade,
) -> String {
    let mut parts = vec![format!(
        "{} scores {composite:.1}/100 ({grade}).",
        ctx.profile.display_name
    )];

    if let Some(best) = categories
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
    {
        parts.push(format!(
            "Strongest area: {} at {:.1}.",
            best.category, best.score
        ));
    }

    if let Some(worst) = categories
        .iter()
        .min_by(|a, b| a.score.total_cmp(&b.score))
    {
        parts.push(format!(
            "{}: {} at {:.1}.",
            opportunity_phrase(worst.score),
            worst.category,
            worst.score
        ));
    }

    if let Some(ai) = ctx.snapshot.as_ref().and_then(|s| s.ai.as_ref()) {
        if !ai.growth_feedback.trim().is_empty() {
            parts.push(ai.growth_feedback.trim().to_string());
        }
        if !ai.posting_feedback.trim().is_empty() {
            parts.push(ai.posting_feedback.trim().to_string());
        }
    }

    parts.join(" ")
}

fn opportunity_phrase(score: f64) -> &'static str {
    if score < 25.0 {
        "Needs immediate attention"
    } else if score < 50.0 {
        "Biggest opportunity"
    } else {
        "Room to grow"
    }
}
