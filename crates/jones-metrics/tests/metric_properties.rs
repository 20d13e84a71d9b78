//! Property-based tests for the metrics engine
//!
//! These hold for arbitrary finite matrices, including near-singular ones:
//! the engine is expected to be total over everything the parser lets
//! through.

use jones_core::{Complex, JonesMatrix, JonesSample};
use jones_metrics::{
    compute_metrics, condition_number, determinant_magnitude, determinant_phase, frobenius_norm,
    METRIC_EPS,
};
use proptest::prelude::*;

fn arb_matrix() -> impl Strategy<Value = JonesMatrix> {
    let f = -100.0..100.0f64;
    (
        (f.clone(), f.clone()),
        (f.clone(), f.clone()),
        (f.clone(), f.clone()),
        (f.clone(), f),
    )
        .prop_map(|(a, b, c, d)| {
            JonesMatrix::new(
                Complex::new(a.0, a.1),
                Complex::new(b.0, b.1),
                Complex::new(c.0, c.1),
                Complex::new(d.0, d.1),
            )
        })
}

proptest! {
    #[test]
    fn prop_frobenius_norm_non_negative(j in arb_matrix()) {
        prop_assert!(frobenius_norm(&j) >= 0.0);
    }

    #[test]
    fn prop_condition_number_at_least_one(j in arb_matrix()) {
        let cond = condition_number(&j);
        prop_assert!(cond.is_finite());
        prop_assert!(cond >= 1.0);
    }

    #[test]
    fn prop_determinant_magnitude_floored(j in arb_matrix()) {
        prop_assert!(determinant_magnitude(&j) >= METRIC_EPS);
    }

    #[test]
    fn prop_determinant_phase_principal(j in arb_matrix()) {
        let phase = determinant_phase(&j);
        prop_assert!(phase.abs() <= std::f64::consts::PI);
    }

    #[test]
    fn prop_first_activity_zero_and_rest_non_negative(
        matrices in prop::collection::vec(arb_matrix(), 1..20)
    ) {
        let samples: Vec<JonesSample> = matrices
            .into_iter()
            .enumerate()
            .map(|(i, m)| JonesSample::new(i as f64, m))
            .collect();
        let metrics = compute_metrics(&samples);
        prop_assert_eq!(metrics.samples()[0].activity, 0.0);
        for m in metrics.samples() {
            prop_assert!(m.activity >= 0.0);
            prop_assert!(m.activity.is_finite());
        }
    }

    #[test]
    fn prop_engine_idempotent(matrices in prop::collection::vec(arb_matrix(), 0..20)) {
        let samples: Vec<JonesSample> = matrices
            .into_iter()
            .enumerate()
            .map(|(i, m)| JonesSample::new(i as f64 * 0.01, m))
            .collect();
        prop_assert_eq!(compute_metrics(&samples), compute_metrics(&samples));
    }
}
