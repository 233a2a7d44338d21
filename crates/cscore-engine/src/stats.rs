//! Small numeric helpers shared by the calculators.

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    Some(values.iter().sum::<f64>() / denom)
}

/// Population standard deviation; `None` for an empty slice.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / denom;
    Some(variance.sqrt())
}

/// Coefficient of variation (`std_dev / mean`); `None` for an empty slice or
/// a zero mean.
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    if m == 0.0 {
        return None;
    }
    Some(population_std_dev(values)? / m)
}
