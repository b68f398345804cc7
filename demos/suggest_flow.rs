//! Full request → response assembly, the way an HTTP handler would use it.
//!
//! Run with: `cargo run --example suggest_flow`

use luqo::{
    personal_weights, suggest, ArmSelectionBandit, BanditConfig, HistoryRow, Kpi,
    PotentialConfig, ScoreSnapshot, SuggestRequest, WeightConfig,
};

fn main() {
    // The bandit lives for the process lifetime; one instance serves all
    // requests.
    let mut bandit = ArmSelectionBandit::new(BanditConfig::default());

    let req = SuggestRequest {
        kpi: Kpi::Growth,
        score: ScoreSnapshot {
            lu: 42.0,
            q: 58.0,
            o: 37.0,
            total: 46.0,
        },
        history: vec![
            HistoryRow::new(38.0, 60.0, 30.0, 18.0),
            HistoryRow::new(40.0, 55.0, 35.0, 25.0),
            HistoryRow::new(45.0, 58.0, 40.0, 33.0),
            HistoryRow::new(44.0, 61.0, 38.0, 30.0),
        ],
    };

    let resp = suggest(&mut bandit, &req, PotentialConfig::default());
    println!("kpi {:?} → mode {:?}", resp.base_kpi, req.kpi.mode());
    println!("action:     {}", resp.suggestion.action);
    println!("luqo hint:  {}", resp.suggestion.luqo_hint);
    println!("potential:  {:.0}–{:.0}", resp.potential.lower, resp.potential.upper);
    println!(
        "scores:     quality={:.1} growth={:.1} innovation={:.1}",
        resp.scores.quality, resp.scores.growth, resp.scores.innovation
    );
    println!("\nsystem prompt:\n{}", resp.suggestion.system_prompt);

    let pw = personal_weights(&req.history, WeightConfig::default());
    println!(
        "\npersonal weights: lu={:.3} q={:.3} o={:.3}",
        pw.weights.lu, pw.weights.q, pw.weights.o
    );
}
