//! Assertions shared by the per-function unit tests.

use crate::dual::{Dual, dual_gradient};
use crate::record::{GradientFn, TestFunction, ValueFn};
use ndarray::Array1;

/// Hand-written gradient agrees with the dual-number derivative at `x`.
pub(crate) fn assert_gradient_matches(value: ValueFn<Dual>, gradient: GradientFn<f64>, x: &[f64]) {
    let x = Array1::from(x.to_vec());
    let ad = dual_gradient(value, &x).expect("dual evaluation should succeed");
    let hand = gradient(&x).expect("gradient evaluation should succeed");
    assert_eq!(ad.len(), hand.len());
    for i in 0..x.len() {
        let tol = 1e-8 * (1.0 + ad[i].abs());
        assert!(
            (ad[i] - hand[i]).abs() <= tol,
            "gradient[{}] at {:?}: hand {} vs dual {}",
            i,
            x,
            hand[i],
            ad[i]
        );
    }
}

/// Value at the documented minimizer matches the documented minimum.
pub(crate) fn assert_minimum(record: &TestFunction<f64>, n: usize) {
    let x = record.meta.min_position(n).expect("admissible dimension");
    let expected = record.meta.min_value(n).expect("admissible dimension");
    let actual = record.value(&x).expect("minimizer should evaluate");
    let tol = record.meta.min_value_tolerance * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{} at {:?}: expected {}, got {}, error {:.2e}",
        record.name(),
        x,
        expected,
        actual,
        (actual - expected).abs()
    );
}
