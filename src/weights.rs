//! Personal weight engine: history → per-dimension focus distribution.
//!
//! Converts a worker's historical `(lu, q, o, reward)` rows into a softmax
//! probability distribution over the three dimensions — "where coaching and
//! reward emphasis should go for this individual."
//!
//! The policy is "raise the weakest profitable axis": a dimension is only
//! weighted up if it *both* correlates with reward *and* has room left to
//! grow. A strong-but-saturated dimension and a weak-but-irrelevant one
//! score equally low.
//!
//! Fallback contract (never an error):
//! - fewer than 3 rows → uniform weights, zeroed diagnostics;
//! - no dimension with a positive `correlation × room` value → uniform
//!   weights, computed diagnostics retained.

use crate::stats::{clamp01, mean, pearson, softmax};
use crate::{Dimension, DimensionTriple, HistoryRow};

/// Dimension scores above this are clamped during normalization.
const SCORE_SCALE: f64 = 100.0;

/// Minimum rows before correlations are considered meaningful.
const MIN_HISTORY: usize = 3;

/// Configuration for [`compute_weights`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightConfig {
    /// Softmax temperature. Lower = sharper distribution.
    ///
    /// Non-finite or non-positive values are coerced to 1.
    pub temperature: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self { temperature: 0.5 }
    }
}

/// Output of [`compute_weights`].
///
/// `weights` is always a valid probability triple (non-negative, sums
/// to 1). The remaining fields are diagnostics for auditing why the
/// distribution came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightResult {
    /// Final per-dimension probabilities.
    pub weights: DimensionTriple,
    /// Raw `correlation × room` per dimension (pre-softmax).
    pub values: DimensionTriple,
    /// Pearson correlation of each dimension with reward, clamped to
    /// `[0, 1]` (anti-correlation is treated as uninformative, not
    /// penalized).
    pub correlations: DimensionTriple,
    /// Growth headroom per dimension: `1 − mean(normalized scores)`,
    /// clamped to `[0, 1]`.
    pub room: DimensionTriple,
}

impl WeightResult {
    /// Uniform distribution with zeroed diagnostics (the short-history
    /// result: nothing was computed).
    fn uniform_empty() -> Self {
        Self {
            weights: DimensionTriple::uniform(),
            values: DimensionTriple::zero(),
            correlations: DimensionTriple::zero(),
            room: DimensionTriple::zero(),
        }
    }
}

/// Compute per-dimension focus weights from a worker's history.
///
/// # Example
///
/// ```rust
/// use luqo::{compute_weights, HistoryRow, WeightConfig};
///
/// // Quality tracks reward and sits low → most of the mass goes to `q`.
/// let history = vec![
///     HistoryRow::new(80.0, 20.0, 80.0, 10.0),
///     HistoryRow::new(80.0, 40.0, 80.0, 40.0),
///     HistoryRow::new(80.0, 30.0, 80.0, 25.0),
///     HistoryRow::new(80.0, 50.0, 80.0, 55.0),
/// ];
/// let r = compute_weights(&history, WeightConfig::default());
/// assert!(r.weights.q > r.weights.lu);
/// assert!((r.weights.sum() - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_weights(history: &[HistoryRow], cfg: WeightConfig) -> WeightResult {
    if history.len() < MIN_HISTORY {
        return WeightResult::uniform_empty();
    }

    // Normalize dimension scores into [0, 1]; out-of-range and non-finite
    // samples are clamped, not rejected.
    let mut series: [Vec<f64>; 3] = [
        Vec::with_capacity(history.len()),
        Vec::with_capacity(history.len()),
        Vec::with_capacity(history.len()),
    ];
    for (slot, d) in Dimension::ALL.iter().enumerate() {
        for row in history {
            series[slot].push(clamp01(row.dimension(*d) / SCORE_SCALE));
        }
    }

    // Rewards are rescaled by their own max magnitude, floored at 1
    // (a flat/zero reward column must not divide by zero).
    let reward_scale = history
        .iter()
        .map(|r| if r.reward.is_finite() { r.reward.abs() } else { 0.0 })
        .fold(0.0, f64::max)
        .max(1.0);
    let rewards: Vec<f64> = history
        .iter()
        .map(|r| {
            if r.reward.is_finite() {
                r.reward / reward_scale
            } else {
                0.0
            }
        })
        .collect();

    let mut correlations = DimensionTriple::zero();
    let mut room = DimensionTriple::zero();
    let mut values = DimensionTriple::zero();
    for (slot, d) in Dimension::ALL.iter().enumerate() {
        let corr = pearson(&series[slot], &rewards).max(0.0);
        let head = clamp01(1.0 - mean(&series[slot]));
        correlations.set(*d, corr);
        room.set(*d, head);
        values.set(*d, corr * head);
    }

    // No dimension earned a positive value: uniform fallback, with the
    // computed diagnostics retained.
    if Dimension::ALL.iter().all(|d| values.get(*d) <= 0.0) {
        return WeightResult {
            weights: DimensionTriple::uniform(),
            values,
            correlations,
            room,
        };
    }

    let probs = softmax(&values.to_array(), cfg.temperature);
    let weights = DimensionTriple::from_array([probs[0], probs[1], probs[2]]);

    WeightResult {
        weights,
        values,
        correlations,
        room,
    }
}
