//! Wire-contract payload types and suggestion assembly.
//!
//! This module is the dependency-light glue between the engines and an
//! HTTP layer: plain data types with wire-faithful field names, plus pure
//! assembly functions, so an external server reproduces the exact response
//! shapes without re-implementing any combination logic.
//!
//! Two payloads are covered:
//! - the suggestion endpoint (`suggest`): bandit pick + potential band +
//!   static mode-indicator scores;
//! - the personal-weights endpoint (`personal_weights`): the weight
//!   engine's result verbatim, with `weights` and `probabilities` emitted
//!   as the same triple.

use crate::{
    compute_weights, potential_range, ArmSelectionBandit, DimensionTriple, HistoryRow, Kpi,
    PotentialConfig, PotentialRange, WeightConfig,
};

/// A worker's current score snapshot as supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSnapshot {
    pub lu: f64,
    pub q: f64,
    pub o: f64,
    pub total: f64,
}

/// Request body for the suggestion endpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuggestRequest {
    pub kpi: Kpi,
    pub score: ScoreSnapshot,
    pub history: Vec<HistoryRow>,
}

/// The recommended coaching action.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Suggestion {
    /// The top arm's focus label.
    pub action: String,
    /// Which LUQO axis the action leans on.
    pub luqo_hint: String,
    /// Prompt text for the downstream text-completion service.
    pub system_prompt: String,
}

/// Static mode-indicator weights. The requested KPI gets the primary
/// share; this split is a fixed indicator, not an output of the weight
/// engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeScores {
    pub quality: f64,
    pub growth: f64,
    pub innovation: f64,
}

const PRIMARY_KPI_SHARE: f64 = 0.6;
const SECONDARY_KPI_SHARE: f64 = 0.2;

impl ModeScores {
    /// The fixed split for a requested KPI.
    pub fn for_kpi(kpi: Kpi) -> Self {
        let mut scores = Self {
            quality: SECONDARY_KPI_SHARE,
            growth: SECONDARY_KPI_SHARE,
            innovation: SECONDARY_KPI_SHARE,
        };
        match kpi {
            Kpi::Quality => scores.quality = PRIMARY_KPI_SHARE,
            Kpi::Growth => scores.growth = PRIMARY_KPI_SHARE,
            Kpi::Innovation => scores.innovation = PRIMARY_KPI_SHARE,
        }
        scores
    }
}

/// Response body for the suggestion endpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SuggestResponse {
    pub suggestion: Suggestion,
    pub potential: PotentialRange,
    pub scores: ModeScores,
    /// The KPI the caller asked for.
    pub base_kpi: Kpi,
    /// The KPI the suggestion was computed for. Currently always equal to
    /// `base_kpi` (no override path); both fields stay on the wire because
    /// clients read both.
    pub chosen_kpi: Kpi,
}

/// Assemble a full suggestion response from a request.
///
/// The bandit picks the focus arm under the request KPI's mode; the
/// potential band is computed from the total score and the history length.
pub fn suggest(
    bandit: &mut ArmSelectionBandit,
    req: &SuggestRequest,
    potential_cfg: PotentialConfig,
) -> SuggestResponse {
    let mode = req.kpi.mode();
    let decision = bandit.select_arms_explain(mode);
    let top = decision.ranked[0].arm;

    SuggestResponse {
        suggestion: Suggestion {
            action: top.focus.to_string(),
            luqo_hint: top.kind.luqo_hint().to_string(),
            system_prompt: top.system_prompt(),
        },
        potential: potential_range(req.score.total, req.history.len() as u64, potential_cfg),
        scores: ModeScores::for_kpi(req.kpi),
        base_kpi: req.kpi,
        chosen_kpi: req.kpi,
    }
}

/// Response body for the personal-weights endpoint.
///
/// `weights` and `probabilities` carry the same triple — the original
/// response emitted both names, and clients read either.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalWeightsResponse {
    pub weights: DimensionTriple,
    pub probabilities: DimensionTriple,
    pub values: DimensionTriple,
    pub correlations: DimensionTriple,
    pub room: DimensionTriple,
}

/// Run the weight engine and shape its result for the wire.
#[must_use]
pub fn personal_weights(history: &[HistoryRow], cfg: WeightConfig) -> PersonalWeightsResponse {
    let r = compute_weights(history, cfg);
    PersonalWeightsResponse {
        weights: r.weights,
        probabilities: r.weights,
        values: r.values,
        correlations: r.correlations,
        room: r.room,
    }
}
