//! Property and edge-case tests for the personal weight engine.

use luqo::{compute_weights, Dimension, DimensionTriple, HistoryRow, WeightConfig};
use proptest::prelude::*;

fn row(lu: f64, q: f64, o: f64, reward: f64) -> HistoryRow {
    HistoryRow::new(lu, q, o, reward)
}

/// Any finite-or-not f64 a hostile caller might send.
fn wild_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6f64..1.0e6f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn wild_row() -> impl Strategy<Value = HistoryRow> {
    (wild_f64(), wild_f64(), wild_f64(), wild_f64()).prop_map(|(lu, q, o, reward)| HistoryRow {
        lu,
        q,
        o,
        reward,
    })
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    /// The output is always a valid distribution, for any input whatsoever.
    #[test]
    fn weights_form_a_distribution(
        history in proptest::collection::vec(wild_row(), 0..32),
        temperature in prop_oneof![Just(f64::NAN), Just(0.0), Just(-3.0), 1.0e-3f64..100.0],
    ) {
        let r = compute_weights(&history, WeightConfig { temperature });
        let sum = r.weights.sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum={}", sum);
        for d in Dimension::ALL {
            let w = r.weights.get(d);
            prop_assert!(w.is_finite());
            prop_assert!((0.0..=1.0).contains(&w));
            prop_assert!(r.correlations.get(d) >= 0.0);
            prop_assert!(r.correlations.get(d) <= 1.0);
            prop_assert!(r.room.get(d) >= 0.0);
            prop_assert!(r.room.get(d) <= 1.0);
        }
    }

    /// Pure function: same history + temperature → identical output.
    #[test]
    fn compute_weights_is_idempotent(
        history in proptest::collection::vec(wild_row(), 0..32),
        temperature in 1.0e-3f64..10.0,
    ) {
        let cfg = WeightConfig { temperature };
        let a = compute_weights(&history, cfg);
        let b = compute_weights(&history, cfg);
        prop_assert_eq!(a, b);
    }

    /// Short history always degrades to the exact uniform result.
    #[test]
    fn short_history_is_exactly_uniform(
        history in proptest::collection::vec(wild_row(), 0..3),
        temperature in 1.0e-3f64..10.0,
    ) {
        let r = compute_weights(&history, WeightConfig { temperature });
        prop_assert_eq!(r.weights, DimensionTriple::uniform());
        prop_assert_eq!(r.values, DimensionTriple::zero());
        prop_assert_eq!(r.correlations, DimensionTriple::zero());
        prop_assert_eq!(r.room, DimensionTriple::zero());
    }
}

// ---------------------------------------------------------------------------
// Edge cases and monotonicity
// ---------------------------------------------------------------------------

/// Two histories identical except that `lu` tracks reward more tightly in
/// the second; `lu`'s series itself is unchanged (same room), so the
/// stronger correlation must not lower its weight.
#[test]
fn stronger_correlation_never_lowers_the_weight() {
    let lu = [20.0, 40.0, 60.0, 80.0];
    // Weak positive relation to lu.
    let rewards_weak = [30.0, 60.0, 40.0, 70.0];
    // Perfect relation to lu.
    let rewards_strong = [20.0, 40.0, 60.0, 80.0];

    let build = |rewards: &[f64; 4]| -> Vec<HistoryRow> {
        lu.iter()
            .zip(rewards)
            .map(|(&l, &r)| row(l, 50.0, 50.0, r))
            .collect()
    };

    let cfg = WeightConfig::default();
    let weak = compute_weights(&build(&rewards_weak), cfg);
    let strong = compute_weights(&build(&rewards_strong), cfg);

    assert!(strong.correlations.lu > weak.correlations.lu);
    assert_eq!(weak.room.lu, strong.room.lu, "room must be held constant");
    assert!(
        strong.weights.lu >= weak.weights.lu,
        "strong={} weak={}",
        strong.weights.lu,
        weak.weights.lu
    );
}

#[test]
fn zero_variance_reward_gives_uniform_weights() {
    let history = vec![
        row(10.0, 40.0, 70.0, 55.0),
        row(20.0, 50.0, 80.0, 55.0),
        row(30.0, 60.0, 90.0, 55.0),
    ];
    let r = compute_weights(&history, WeightConfig::default());
    assert_eq!(r.weights, DimensionTriple::uniform());
    assert_eq!(r.correlations, DimensionTriple::zero());
}

#[test]
fn saturated_dimension_earns_no_weight_advantage() {
    // `q` correlates with reward but sits at 100 — no room, no value.
    let history = vec![
        row(10.0, 100.0, 50.0, 10.0),
        row(30.0, 100.0, 50.0, 30.0),
        row(50.0, 100.0, 50.0, 50.0),
    ];
    let r = compute_weights(&history, WeightConfig::default());
    assert_eq!(r.room.q, 0.0);
    assert_eq!(r.values.q, 0.0);
    // `lu` has both signal and room, so it must dominate.
    assert!(r.weights.lu > r.weights.q);
}

#[test]
fn temperature_sharpens_the_distribution() {
    let history = vec![
        row(10.0, 90.0, 50.0, 10.0),
        row(30.0, 85.0, 50.0, 30.0),
        row(50.0, 95.0, 50.0, 50.0),
        row(70.0, 90.0, 50.0, 70.0),
    ];
    let sharp = compute_weights(&history, WeightConfig { temperature: 0.1 });
    let soft = compute_weights(&history, WeightConfig { temperature: 5.0 });
    // Lower temperature concentrates mass on the winning dimension.
    assert!(sharp.weights.lu > soft.weights.lu);
}

#[test]
fn reward_scale_does_not_change_the_result() {
    let base = vec![
        row(10.0, 60.0, 50.0, 1.0),
        row(30.0, 70.0, 50.0, 2.0),
        row(50.0, 80.0, 50.0, 3.0),
    ];
    let scaled: Vec<HistoryRow> = base
        .iter()
        .map(|r| row(r.lu, r.q, r.o, r.reward * 1000.0))
        .collect();
    let cfg = WeightConfig::default();
    let a = compute_weights(&base, cfg);
    let b = compute_weights(&scaled, cfg);
    for d in Dimension::ALL {
        assert!(
            (a.weights.get(d) - b.weights.get(d)).abs() < 1e-9,
            "dimension {:?}",
            d
        );
    }
}
