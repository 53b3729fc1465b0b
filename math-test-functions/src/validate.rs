//! Input checks shared by value functions and gradients.

use crate::error::{Result, TestFunctionError};
use crate::metadata::Dimension;
use crate::scalar::Scalar;
use ndarray::Array1;

/// Validate the length of `x` and set up the scalar's precision.
///
/// Returns the dimension on success.
pub fn check_input<T: Scalar>(
    function: &'static str,
    dimension: Dimension,
    x: &Array1<T>,
) -> Result<usize> {
    let n = x.len();
    dimension.check(function, n)?;
    T::configure_precision();
    Ok(n)
}

/// Any component is NaN.
pub fn has_nan<T: Scalar>(x: &Array1<T>) -> bool {
    x.iter().any(|xi| xi.is_nan())
}

/// Any component is infinite.
pub fn has_inf<T: Scalar>(x: &Array1<T>) -> bool {
    x.iter().any(|xi| xi.is_infinite())
}

/// Vector of `n` NaNs.
pub fn nan_vector<T: Scalar>(n: usize) -> Array1<T> {
    Array1::from_elem(n, T::nan())
}

/// Vector of `n` copies of `v`.
pub fn filled<T: Scalar>(n: usize, v: T) -> Array1<T> {
    Array1::from_elem(n, v)
}

/// Reject any negative component; used by formulas taking square roots of
/// raw coordinates.
pub fn require_non_negative<T: Scalar>(function: &'static str, x: &Array1<T>) -> Result<()> {
    match x.iter().position(|xi| *xi < T::zero()) {
        Some(i) => Err(TestFunctionError::DomainViolation {
            function,
            reason: format!("x[{}] = {} must be non-negative", i, x[i].value_f64()),
        }),
        None => Ok(()),
    }
}

/// Sign with `sign(0) = 0`, the subgradient choice at absolute-value kinks.
pub fn sign<T: Scalar>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dual;

    #[test]
    fn test_check_input() {
        let x = Array1::<f64>::from(vec![1.0, 2.0]);
        assert_eq!(check_input("booth", Dimension::Fixed(2), &x), Ok(2));

        let empty: Array1<f64> = Array1::<f64>::from(vec![]);
        assert!(check_input("sphere", Dimension::scalable(1, 2), &empty).is_err());
    }

    #[test]
    fn test_nan_and_inf_detection() {
        let x = Array1::<f64>::from(vec![1.0, f64::NAN]);
        assert!(has_nan(&x));
        assert!(!has_inf(&x));

        let y = Array1::from(vec![Dual::constant(f64::NEG_INFINITY), Dual::variable(0.0)]);
        assert!(has_inf(&y));
        assert!(nan_vector::<f64>(3).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_require_non_negative() {
        let x = Array1::<f64>::from(vec![0.0, -1.0]);
        let err = require_non_negative("alpine_n2", &x).unwrap_err();
        assert!(err.is_domain_error());
        assert_eq!(sign(-3.0), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }
}
