//! Thompson-style sampling over the fixed coaching-arm catalog.
//!
//! Each arm carries Beta shape parameters; a selection draws one Beta
//! sample per arm, adds the mode boost, and ranks descending. With the
//! default priors the shapes are never updated after construction, so
//! this behaves as randomized top-K selection biased by mode rather than
//! a learning bandit — the shapes are state, not learned posteriors.
//!
//! Notes:
//! - The bandit is **seedable** so selection can be reproducible in tests.
//! - Default construction uses a fixed seed (deterministic by default).
//! - One instance is intended to live for the process lifetime and be
//!   reused across requests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Beta, Distribution};
use std::collections::BTreeMap;

use crate::{mode_boost, Arm, Mode, ARM_CATALOG};

/// Prior configuration for the per-arm Beta shapes.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BanditConfig {
    /// Prior alpha applied to every arm (must be > 0).
    pub alpha0: f64,
    /// Prior beta applied to every arm (must be > 0).
    pub beta0: f64,
}

impl Default for BanditConfig {
    fn default() -> Self {
        Self {
            alpha0: 2.0,
            beta0: 2.0,
        }
    }
}

/// Beta shape parameters for one arm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaShape {
    pub alpha: f64,
    pub beta: f64,
}

impl BetaShape {
    /// Posterior mean `alpha / (alpha + beta)`, or 0.5 when degenerate.
    pub fn expected_value(&self) -> f64 {
        let denom = self.alpha + self.beta;
        if denom <= 0.0 || !denom.is_finite() {
            0.5
        } else {
            self.alpha / denom
        }
    }
}

/// One ranked row of an arm-selection decision.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArmScore {
    pub arm: &'static Arm,
    /// Raw Beta draw in `[0, 1]`.
    pub sample: f64,
    /// Additive mode boost applied.
    pub boost: f64,
    /// `sample + boost` — the value actually ranked on.
    pub score: f64,
}

/// Audit-friendly record of one selection: every arm's draw and boost,
/// ranked descending by boosted score.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArmSelectionDecision {
    /// The mode that biased this selection.
    pub mode: Mode,
    /// All six arms, best first. Ties keep catalog order.
    pub ranked: Vec<ArmScore>,
}

impl ArmSelectionDecision {
    /// The top `n` arms of this decision.
    pub fn top(&self, n: usize) -> Vec<&'static Arm> {
        self.ranked.iter().take(n).map(|r| r.arm).collect()
    }
}

/// Seedable arm-selection bandit over [`ARM_CATALOG`].
#[derive(Debug, Clone)]
pub struct ArmSelectionBandit {
    cfg: BanditConfig,
    shapes: BTreeMap<&'static str, BetaShape>,
    rng: StdRng,
}

impl ArmSelectionBandit {
    /// Create a bandit with a deterministic fixed seed (0).
    pub fn new(cfg: BanditConfig) -> Self {
        Self::with_seed(cfg, 0)
    }

    /// Create a bandit with an explicit seed (reproducible).
    pub fn with_seed(cfg: BanditConfig, seed: u64) -> Self {
        let alpha = if cfg.alpha0.is_finite() && cfg.alpha0 > 0.0 {
            cfg.alpha0
        } else {
            2.0
        };
        let beta = if cfg.beta0.is_finite() && cfg.beta0 > 0.0 {
            cfg.beta0
        } else {
            2.0
        };
        let shapes = ARM_CATALOG
            .iter()
            .map(|a| (a.id, BetaShape { alpha, beta }))
            .collect();
        Self {
            cfg,
            shapes,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The config this bandit was built with.
    pub fn config(&self) -> BanditConfig {
        self.cfg
    }

    /// Access the per-arm Beta shapes.
    pub fn shapes(&self) -> &BTreeMap<&'static str, BetaShape> {
        &self.shapes
    }

    fn sample_beta(&mut self, shape: BetaShape) -> f64 {
        if !(shape.alpha.is_finite() && shape.beta.is_finite())
            || shape.alpha <= 0.0
            || shape.beta <= 0.0
        {
            return 0.5;
        }
        match Beta::new(shape.alpha, shape.beta) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0.5,
        }
    }

    /// Sample, boost, and rank every arm under `mode`.
    pub fn select_arms_explain(&mut self, mode: Mode) -> ArmSelectionDecision {
        let mut ranked: Vec<ArmScore> = Vec::with_capacity(ARM_CATALOG.len());
        for arm in &ARM_CATALOG {
            let shape = self
                .shapes
                .get(arm.id)
                .copied()
                .unwrap_or(BetaShape {
                    alpha: self.cfg.alpha0,
                    beta: self.cfg.beta0,
                });
            let sample = self.sample_beta(shape);
            let boost = mode_boost(mode, arm);
            ranked.push(ArmScore {
                arm,
                sample,
                boost,
                score: sample + boost,
            });
        }
        // Stable sort: exact ties keep catalog order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ArmSelectionDecision { mode, ranked }
    }

    /// The top three arms under `mode`, best first.
    pub fn select_arms(&mut self, mode: Mode) -> [&'static Arm; 3] {
        let decision = self.select_arms_explain(mode);
        [
            decision.ranked[0].arm,
            decision.ranked[1].arm,
            decision.ranked[2].arm,
        ]
    }
}

impl Default for ArmSelectionBandit {
    fn default() -> Self {
        Self::new(BanditConfig::default())
    }
}
