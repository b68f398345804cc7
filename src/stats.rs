//! Shared numeric helpers: mean, Pearson correlation, slice softmax.
//!
//! All helpers are total functions: degenerate input (empty series, zero
//! variance, non-finite temperature) maps to a defined zero/uniform output
//! instead of an error.

/// Clamp into `[0, 1]`, mapping non-finite input to 0.
#[must_use]
pub fn clamp01(x: f64) -> f64 {
    if x.is_finite() {
        x.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Arithmetic mean, or 0 for an empty series.
#[must_use]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Pearson correlation of two equal-length series, clamped to `[-1, 1]`.
///
/// Returns 0 when either series has (near-)zero variance or fewer than two
/// points — the caller never sees a NaN from a flat series.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;
    for i in 0..n {
        let x = xs[i];
        let y = ys[i];
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_yy += y * y;
        sum_xy += x * y;
    }
    let nf = n as f64;
    let num = nf * sum_xy - sum_x * sum_y;
    let den_x = nf * sum_xx - sum_x * sum_x;
    let den_y = nf * sum_yy - sum_y * sum_y;
    let den = (den_x.max(0.0) * den_y.max(0.0)).sqrt();
    if den <= 1e-12 || !den.is_finite() || !num.is_finite() {
        0.0
    } else {
        (num / den).clamp(-1.0, 1.0)
    }
}

/// Softmax over a slice of scores with a temperature.
///
/// - Empty input returns an empty vector.
/// - Non-finite or non-positive `temperature` is coerced to 1.
/// - Uses the standard max-subtraction trick for numerical stability.
/// - Falls back to uniform if the exponentials degenerate (e.g. every
///   score is `-inf`).
#[must_use]
pub fn softmax(scores: &[f64], temperature: f64) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let t = if temperature.is_finite() && temperature > 0.0 {
        temperature
    } else {
        1.0
    };

    let max_score = scores
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max_score.is_finite() {
        let n = scores.len() as f64;
        return vec![1.0 / n; scores.len()];
    }

    let mut out: Vec<f64> = Vec::with_capacity(scores.len());
    let mut denom = 0.0;
    for &v in scores {
        let x = if v.is_finite() {
            ((v - max_score) / t).exp()
        } else {
            0.0
        };
        denom += x;
        out.push(x);
    }
    if denom <= 0.0 || !denom.is_finite() {
        let n = scores.len() as f64;
        return vec![1.0 / n; scores.len()];
    }
    for v in &mut out {
        *v /= denom;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn pearson_perfectly_aligned_is_one() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [10.0, 20.0, 30.0, 40.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_flat_series_is_zero() {
        let xs = [5.0, 5.0, 5.0];
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&xs, &ys), 0.0);
        assert_eq!(pearson(&ys, &xs), 0.0);
    }

    #[test]
    fn pearson_anti_aligned_is_minus_one() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        assert!((pearson(&xs, &ys) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn softmax_sums_to_one() {
        let p = softmax(&[0.0, 1.0, -2.0], 1.0);
        let s: f64 = p.iter().sum();
        assert!((s - 1.0).abs() < 1e-9, "sum={}", s);
    }

    #[test]
    fn softmax_survives_huge_magnitudes() {
        let p = softmax(&[1.0e6, -1.0e6, 0.0], 0.5);
        let s: f64 = p.iter().sum();
        assert!((s - 1.0).abs() < 1e-9, "sum={}", s);
        for v in &p {
            assert!(v.is_finite());
        }
    }

    proptest! {
        #[test]
        fn softmax_is_a_distribution(
            scores in proptest::collection::vec(
                prop_oneof![
                    -1.0e6f64..1.0e6f64,
                    Just(f64::NAN),
                    Just(f64::INFINITY),
                    Just(f64::NEG_INFINITY),
                ],
                0..16,
            ),
            temperature in prop_oneof![Just(f64::NAN), Just(0.0), Just(-1.0), 1.0e-6f64..1.0e6f64],
        ) {
            let p = softmax(&scores, temperature);

            // Deterministic.
            let p2 = softmax(&scores, temperature);
            prop_assert_eq!(&p, &p2);

            if scores.is_empty() {
                prop_assert!(p.is_empty());
            } else {
                prop_assert_eq!(p.len(), scores.len());
                let sum: f64 = p.iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9, "sum={}", sum);
                for &v in &p {
                    prop_assert!(v.is_finite());
                    prop_assert!((0.0..=1.0).contains(&v));
                }
            }
        }

        #[test]
        fn pearson_is_bounded_and_finite(
            xs in proptest::collection::vec(-1.0e6f64..1.0e6f64, 0..32),
            ys in proptest::collection::vec(-1.0e6f64..1.0e6f64, 0..32),
        ) {
            let r = pearson(&xs, &ys);
            prop_assert!(r.is_finite());
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }
}
