//! Bukin N.6 test function

use super::prelude::*;

const NAME: &str = "bukin_n6";
const DIM: Dimension = Dimension::Fixed(2);

/// Bukin N.6 function - 2D multimodal, minimum inside a non-smooth ridge
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
///
/// `min_value_tolerance` holds for `f64` only: in `f32` the rounding of
/// `0.01 x1^2` is amplified by the square root, giving about 0.024 at the
/// minimizer.
///
/// Infinite input: +∞.
pub fn bukin_n6<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    let u = x2 - T::lit(0.01) * x1 * x1;
    Ok(T::lit(100.0) * u.abs().sqrt() + T::lit(0.01) * (x1 + T::lit(10.0)).abs())
}

/// Gradient of [`bukin_n6`].
///
/// The square root has an infinite slope on the ridge `x2 = 0.01 x1^2`,
/// which contains the global minimum; evaluating there returns
/// [`TestFunctionError::NotDifferentiable`].
pub fn bukin_n6_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let u = x2 - T::lit(0.01) * x1 * x1;
    if u == T::zero() {
        return Err(TestFunctionError::NotDifferentiable {
            function: NAME,
            reason: format!(
                "x2 = 0.01 * x1^2 at ({}, {})",
                x1.value_f64(),
                x2.value_f64()
            ),
        });
    }
    let k = T::lit(50.0) * sign(u) / u.abs().sqrt();
    Ok(Array1::from(vec![
        k * T::lit(-0.02) * x1 + T::lit(0.01) * sign(x1 + T::lit(10.0)),
        k,
    ]))
}

/// Catalog record for [`bukin_n6`].
pub fn bukin_n6_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        bukin_n6,
        bukin_n6_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Narrow parabolic ridge of kinks; the minimum lies on the ridge itself.",
            math: r"f(\mathbf{x}) = 100\sqrt{|x_2 - 0.01x_1^2|} + 0.01|x_1 + 10|",
            source: "Silagadze (2007), Finding two-dimensional peaks",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[-8.0, 2.0]),
            min_position: VectorSpec::Fixed(&[-10.0, 1.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fixed(&[-15.0, -3.0]),
            ub: VectorSpec::Fixed(&[-5.0, 3.0]),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_bukin_n6_known_properties() {
        assert_minimum(&bukin_n6_function(), 2);
        let err = bukin_n6_gradient(&Array1::<f64>::from(vec![-10.0, 1.0])).unwrap_err();
        assert!(matches!(err, TestFunctionError::NotDifferentiable { .. }));
        assert_eq!(err.function(), "bukin_n6");
    }

    #[test]
    fn test_bukin_n6_gradient_off_ridge() {
        assert_gradient_matches(bukin_n6, bukin_n6_gradient, &[-8.0, 2.0]);
        assert_gradient_matches(bukin_n6, bukin_n6_gradient, &[-12.0, 0.3]);
    }

    #[test]
    fn test_bukin_n6_single_precision_minimum() {
        let v = bukin_n6(&Array1::<f32>::from(vec![-10.0, 1.0])).unwrap();
        assert!(v.is_finite() && (0.0..0.05).contains(&v), "{}", v);
    }
}
