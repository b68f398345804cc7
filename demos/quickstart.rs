//! Minimal end-to-end usage: weights, arm selection, potential band.
//!
//! Run with: `cargo run --example quickstart`

use luqo::{
    compute_weights, potential_range, ArmSelectionBandit, BanditConfig, HistoryRow, Mode,
    PotentialConfig, WeightConfig,
};

fn main() {
    // A worker whose quality score tracks reward and sits low.
    let history = vec![
        HistoryRow::new(75.0, 25.0, 60.0, 12.0),
        HistoryRow::new(80.0, 35.0, 55.0, 28.0),
        HistoryRow::new(70.0, 30.0, 65.0, 22.0),
        HistoryRow::new(78.0, 45.0, 60.0, 41.0),
        HistoryRow::new(74.0, 50.0, 58.0, 49.0),
    ];

    let result = compute_weights(&history, WeightConfig::default());
    println!("focus weights:  lu={:.3} q={:.3} o={:.3}",
        result.weights.lu, result.weights.q, result.weights.o);
    println!("correlations:   lu={:.3} q={:.3} o={:.3}",
        result.correlations.lu, result.correlations.q, result.correlations.o);
    println!("growth room:    lu={:.3} q={:.3} o={:.3}",
        result.room.lu, result.room.q, result.room.o);

    let mut bandit = ArmSelectionBandit::with_seed(BanditConfig::default(), 7);
    let top3 = bandit.select_arms(Mode::Earn);
    println!("\nEARN picks:");
    for (i, arm) in top3.iter().enumerate() {
        println!("  {}. {} — {}", i + 1, arm.id, arm.focus);
    }

    let band = potential_range(46.0, history.len() as u64, PotentialConfig::default());
    println!("\npotential: {:.0}–{:.0}", band.lower, band.upper);
}
