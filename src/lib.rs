//! `luqo`: personal performance weighting + coaching-arm selection primitives.
//!
//! Two cooperating pure-computation engines for a worker-coaching system,
//! plus the payload glue that combines them:
//!
//! - **Weight engine** ([`compute_weights`]): turns a worker's historical
//!   `(lu, q, o, reward)` rows into a softmax probability distribution over
//!   the three LUQO dimensions. A dimension earns weight only when it both
//!   correlates with reward *and* has growth room left — "raise the weakest
//!   profitable axis", not "raise whatever is already strong".
//! - **Arm bandit** ([`ArmSelectionBandit`]): Thompson-style sampling over a
//!   fixed six-arm coaching catalog. Each arm draws from its Beta shape,
//!   gets an additive boost under the caller's [`Mode`], and the top three
//!   boosted draws win. Shapes are fixed at construction — this is
//!   randomized, mode-biased top-K selection, not a learning loop.
//! - **Potential band** ([`potential_range`]): an asymmetric uncertainty
//!   band around a current score that narrows as more logs back it.
//! - **Payloads** ([`suggest`], [`personal_weights`]): the externally
//!   observed endpoint shapes, assembled from the engines. Transport is the
//!   caller's problem.
//!
//! **Goals:**
//! - **Total functions**: every input — short history, flat series, NaN,
//!   infinities — maps to a defined uniform/fallback output. Nothing in the
//!   core throws, so a coaching suggestion can never crash a request.
//! - **Deterministic by default**: the bandit is seedable and constructs
//!   with a fixed seed; same seed + same call sequence → same picks.
//! - **Stateless per call**: the weight engine stores nothing; identical
//!   history and temperature always yield identical weights.
//!
//! **Non-goals:**
//! - No HTTP transport, persistence, or auth — callers own those.
//! - No online learning: arm shapes are never updated from outcomes.
//!
//! # Example
//!
//! ```rust
//! use luqo::{
//!     compute_weights, ArmSelectionBandit, BanditConfig, HistoryRow, Mode, WeightConfig,
//! };
//!
//! let history = vec![
//!     HistoryRow::new(20.0, 85.0, 40.0, 12.0),
//!     HistoryRow::new(35.0, 80.0, 45.0, 30.0),
//!     HistoryRow::new(50.0, 90.0, 40.0, 48.0),
//!     HistoryRow::new(60.0, 85.0, 50.0, 61.0),
//! ];
//! let weights = compute_weights(&history, WeightConfig::default()).weights;
//! assert!((weights.sum() - 1.0).abs() < 1e-9);
//!
//! let mut bandit = ArmSelectionBandit::with_seed(BanditConfig::default(), 7);
//! let top3 = bandit.select_arms(Mode::Earn);
//! assert_eq!(top3.len(), 3);
//! ```

#![forbid(unsafe_code)]

mod dimension;
pub use dimension::*;

mod history;
pub use history::*;

mod stats;
pub use stats::*;

mod weights;
pub use weights::*;

mod arms;
pub use arms::*;

mod bandit;
pub use bandit::*;

mod potential;
pub use potential::*;

mod suggest;
pub use suggest::*;

pub const LUQO_VERSION: &str = env!("CARGO_PKG_VERSION");
