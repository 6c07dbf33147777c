//! Historical Value-at-Risk.

use super::RiskError;

/// Value at Risk via historical simulation: the `confidence_level` quantile
/// of the empirical return distribution.
///
/// A confidence level of 0.05 yields the 5th percentile — a negative number
/// representing the loss not exceeded in 95% of observed periods.
pub fn historical_var(returns: &[f64], confidence_level: f64) -> Result<f64, RiskError> {
    if returns.is_empty() {
        return Err(RiskError::EmptyReturns);
    }
    if !(0.0..1.0).contains(&confidence_level) || confidence_level == 0.0 {
        return Err(RiskError::BadConfidence {
            value: confidence_level,
        });
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok(quantile_sorted(&sorted, confidence_level))
}

/// Quantile of a sorted slice using linear interpolation between the two
/// nearest ranks.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}
