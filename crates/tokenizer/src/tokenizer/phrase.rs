//! Frequency estimates for phrases that are not tabulated.

/// Combine per-token frequencies into a phrase frequency.
///
/// Uses the reciprocal sum `1 / Σ(1 / fᵢ)`. For two or more tokens the result
/// is strictly below the smallest input; it is positive whenever every input
/// is, and grows with each input.
///
/// Returns `None` for an empty slice or when any token has no positive
/// frequency.
pub fn combine_frequencies(freqs: &[f64]) -> Option<f64> {
    if freqs.is_empty() || freqs.iter().any(|&f| !(f > 0.0)) {
        return None;
    }
    let reciprocal_sum: f64 = freqs.iter().map(|f| 1.0 / f).sum();
    Some(1.0 / reciprocal_sum)
}
