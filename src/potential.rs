//! Potential band: an uncertainty range around a current score.
//!
//! The band narrows as more logs back the score, and is asymmetric by
//! design — the upside share is larger than the downside share, so the
//! band is optimistic about unrealized potential.

use crate::stats::clamp01;

/// Maximum score on the 0–100 scale.
const SCORE_MAX: f64 = 100.0;

/// Configuration for [`potential_range`].
///
/// Defaults reproduce the canonical band:
/// `uncertainty = max(5, 30 − 2·logs)`, downside `0.4·u`, upside `0.6·u`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotentialConfig {
    /// Uncertainty with zero logs.
    pub base_uncertainty: f64,
    /// Uncertainty removed per observed log.
    pub shrink_per_log: f64,
    /// Floor the uncertainty never shrinks below.
    pub min_uncertainty: f64,
    /// Fraction of the uncertainty applied below the score.
    pub downside_share: f64,
    /// Fraction of the uncertainty applied above the score.
    pub upside_share: f64,
}

impl Default for PotentialConfig {
    fn default() -> Self {
        Self {
            base_uncertainty: 30.0,
            shrink_per_log: 2.0,
            min_uncertainty: 5.0,
            downside_share: 0.4,
            upside_share: 0.6,
        }
    }
}

/// A `[lower, upper]` band around a current score, clamped into `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotentialRange {
    pub lower: f64,
    pub upper: f64,
}

fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        fallback
    }
}

/// Compute the potential band for `current_score` backed by `logs_count`
/// observations.
///
/// # Example
///
/// ```rust
/// use luqo::{potential_range, PotentialConfig};
///
/// let wide = potential_range(50.0, 0, PotentialConfig::default());
/// assert_eq!((wide.lower, wide.upper), (38.0, 68.0));
///
/// let narrow = potential_range(50.0, 20, PotentialConfig::default());
/// assert_eq!((narrow.lower, narrow.upper), (48.0, 53.0));
/// ```
#[must_use]
pub fn potential_range(current_score: f64, logs_count: u64, cfg: PotentialConfig) -> PotentialRange {
    let d = PotentialConfig::default();
    let base = finite_or(cfg.base_uncertainty, d.base_uncertainty).max(0.0);
    let shrink = finite_or(cfg.shrink_per_log, d.shrink_per_log).max(0.0);
    let floor = finite_or(cfg.min_uncertainty, d.min_uncertainty).max(0.0);
    let down = clamp01(cfg.downside_share);
    let up = clamp01(cfg.upside_share);
    let score = finite_or(current_score, 0.0);

    let uncertainty = (base - shrink * logs_count as f64).max(floor);
    PotentialRange {
        lower: (score - down * uncertainty).clamp(0.0, SCORE_MAX),
        upper: (score + up * uncertainty).clamp(0.0, SCORE_MAX),
    }
}
