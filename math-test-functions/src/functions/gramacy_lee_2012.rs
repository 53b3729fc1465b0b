//! Gramacy & Lee (2012) test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "gramacy_lee_2012";
const DIM: Dimension = Dimension::Fixed(1);

/// Gramacy & Lee (2012) function - 1D multimodal
/// Global minimum: f(x) = -0.8690111349894998 at x = 0.548563444114526
/// Bounds: x in [0.5, 2.5]
///
/// `x = 0` is outside the domain (division by zero) and is rejected.
/// Infinite input: +∞.
pub fn gramacy_lee_2012<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let x0 = nonzero(x[0])?;
    Ok((T::lit(10.0 * PI) * x0).sin() / (T::lit(2.0) * x0) + (x0 - T::one()).powi(4))
}

fn nonzero<T: Scalar>(x0: T) -> Result<T> {
    if x0 == T::zero() {
        return Err(TestFunctionError::DomainViolation {
            function: NAME,
            reason: "x = 0 divides by zero".to_string(),
        });
    }
    Ok(x0)
}

/// Gradient of [`gramacy_lee_2012`].
pub fn gramacy_lee_2012_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let x0 = nonzero(x[0])?;
    let w = T::lit(10.0 * PI) * x0;
    let d = T::lit(5.0 * PI) * w.cos() / x0 - w.sin() / (T::lit(2.0) * x0 * x0)
        + T::lit(4.0) * (x0 - T::one()).powi(3);
    Ok(Array1::from(vec![d]))
}

/// Catalog record for [`gramacy_lee_2012`].
pub fn gramacy_lee_2012_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        gramacy_lee_2012,
        gramacy_lee_2012_gradient,
        FunctionMetadata {
            name: NAME,
            description: "One-dimensional damped sine with a quartic trend.",
            math: r"f(x) = \frac{\sin(10\pi x)}{2x} + (x - 1)^4",
            source: "Gramacy & Lee (2012), Cases for the nugget in modeling computer experiments",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.3]),
            min_position: VectorSpec::Fixed(&[0.548563444114526]),
            min_value: ValueSpec::Fixed(-0.8690111349894998),
            lb: VectorSpec::Fixed(&[0.5]),
            ub: VectorSpec::Fixed(&[2.5]),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_gramacy_lee_2012_known_properties() {
        assert_minimum(&gramacy_lee_2012_function(), 1);
        assert!((gramacy_lee_2012(&Array1::<f64>::from(vec![2.5])).unwrap() - 5.0625).abs() < 1e-12);
    }

    #[test]
    fn test_gramacy_lee_2012_rejects_zero() {
        let x = Array1::<f64>::from(vec![0.0]);
        assert!(gramacy_lee_2012(&x).unwrap_err().is_domain_error());
        assert!(gramacy_lee_2012_gradient(&x).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_gramacy_lee_2012_gradient() {
        assert_gradient_matches(gramacy_lee_2012, gramacy_lee_2012_gradient, &[1.3]);
    }
}
