//! Schaffer N.2 test function

use super::prelude::*;

const NAME: &str = "schaffer_n2";
const DIM: Dimension = Dimension::Fixed(2);

/// Schaffer N.2 function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: 0.5, the limit as the denominator grows; gradient is zero.
pub fn schaffer_n2<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::lit(0.5));
    }
    let (x1, x2) = (x[0], x[1]);
    let half = T::lit(0.5);
    let den = T::one() + T::lit(0.001) * (x1 * x1 + x2 * x2);
    Ok(half + ((x1 * x1 - x2 * x2).sin().powi(2) - half) / (den * den))
}

/// Gradient of [`schaffer_n2`].
pub fn schaffer_n2_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let (x1, x2) = (x[0], x[1]);
    let two = T::lit(2.0);
    let a = x1 * x1 - x2 * x2;
    let s = a.sin().powi(2);
    let den = T::one() + T::lit(0.001) * (x1 * x1 + x2 * x2);
    let d2 = den * den;
    let ds = (two * a).sin();
    let tail = two * (s - T::lit(0.5)) * T::lit(0.002) / (d2 * den);
    Ok(Array1::from(vec![
        ds * two * x1 / d2 - tail * x1,
        -ds * two * x2 / d2 - tail * x2,
    ]))
}

/// Catalog record for [`schaffer_n2`].
pub fn schaffer_n2_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        schaffer_n2,
        schaffer_n2_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Hyperbolic ripples damped by distance from the origin.",
            math: r"f(\mathbf{x}) = 0.5 + \frac{\sin^2(x_1^2 - x_2^2) - 0.5}{[1 + 0.001(x_1^2 + x_2^2)]^2}",
            source: "Schaffer (1984), Some experiments in machine learning using vector evaluated genetic algorithms",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 2.0]),
            min_position: VectorSpec::Fixed(&[0.0, 0.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-100.0),
            ub: VectorSpec::Fill(100.0),
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
    fn test_schaffer_n2_known_properties() {
        assert_minimum(&schaffer_n2_function(), 2);
        let x = Array1::<f64>::from(vec![f64::NEG_INFINITY, 3.0]);
        assert_eq!(schaffer_n2(&x).unwrap(), 0.5);
    }

    #[test]
    fn test_schaffer_n2_gradient() {
        assert_gradient_matches(schaffer_n2, schaffer_n2_gradient, &[1.2, 0.7]);
    }
}
