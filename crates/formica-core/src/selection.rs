//! Transition rule and roulette-wheel selection.
//!
//! The random draw is an argument, not something pulled from ambient
//! state, so selection is a pure function of the weights and `r`.

use crate::types::NodeId;

/// A neighbor an ant may move to, with its unnormalized desirability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    pub distance: f64,
    pub weight: f64,
}

/// ACO transition weight: `pheromone^alpha * (1 / distance)^beta`.
///
/// Higher `alpha` trusts the colony's trails, higher `beta` trusts raw
/// edge cost.
pub fn transition_weight(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    pheromone.powf(alpha) * (1.0 / distance).powf(beta)
}

/// Normalize weights into probabilities.
///
/// Weights that overflowed to `+inf` share all of the probability
/// evenly. Otherwise weights are scaled by the largest one before
/// summing, so large finite weights cannot overflow the total. NaN and
/// negative weights count as zero. Returns `None` when no weight is
/// positive; callers treat that as "no viable move".
pub fn normalize(weights: &[f64]) -> Option<Vec<f64>> {
    let unbounded = weights.iter().filter(|w| **w == f64::INFINITY).count();
    if unbounded > 0 {
        let share = 1.0 / unbounded as f64;
        return Some(
            weights
                .iter()
                .map(|w| if *w == f64::INFINITY { share } else { 0.0 })
                .collect(),
        );
    }

    let viable = |w: f64| if w > 0.0 { w } else { 0.0 };
    let largest = weights.iter().copied().map(viable).fold(0.0, f64::max);
    if largest <= 0.0 {
        return None;
    }
    let scaled: Vec<f64> = weights.iter().map(|w| viable(*w) / largest).collect();
    let total: f64 = scaled.iter().sum();
    Some(scaled.into_iter().map(|w| w / total).collect())
}

/// Cumulative-weighted sampling over `probabilities` with draw `r` in `[0, 1)`.
///
/// Returns the first index whose running sum reaches `r`. Rounding can
/// leave the final sum just below `r`; the last index is returned then.
/// `None` only for an empty slice.
pub fn roulette(probabilities: &[f64], r: f64) -> Option<usize> {
    if probabilities.is_empty() {
        return None;
    }
    let mut cumulative = 0.0;
    for (idx, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative >= r {
            return Some(idx);
        }
    }
    Some(probabilities.len() - 1)
}

/// Pick a candidate for draw `r`, or `None` when nothing is viable.
pub fn select(candidates: &[Candidate], r: f64) -> Option<&Candidate> {
    let weights: Vec<f64> = candidates.iter().map(|c| c.weight).collect();
    let probabilities = normalize(&weights)?;
    roulette(&probabilities, r).map(|idx| &candidates[idx])
}
