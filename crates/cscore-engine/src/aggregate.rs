//! Combines the six category scores into the composite report figures.

use crate::report::{CategoryScore, Grade};

/// Composite score: plain arithmetic mean of the category scores. The
/// weighting happens inside each category; across categories every
/// dimension counts equally.
#[must_use]
pub fn composite(categories: &[CategoryScore]) -> f64 {
    if categories.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = categories.len() as f64;
    categories.iter().map(|c| c.score).sum::<f64>() / denom
}

#[must_use]
pub fn grade_for(composite: f64) -> Grade {
    if composite >= 75.0 {
        Grade::Strong
    } else if composite >= 50.0 {
        Grade::Good
    } else if composite >= 25.0 {
        Grade::Average
    } else {
        Grade::Weak
    }
}

/// Week-over-week composite delta.
///
/// Always 0.0: the engine does not persist score history, so there is
/// nothing to diff against yet. The field stays in the report so the shape
/// is stable once a history store exists.
#[must_use]
pub fn weekly_delta() -> f64 {
    0.0
}
