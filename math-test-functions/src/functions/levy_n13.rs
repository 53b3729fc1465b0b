//! Levy N.13 test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "levy_n13";
const DIM: Dimension = Dimension::Fixed(2);

/// Levy N.13 function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn levy_n13<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    let three_pi = T::lit(3.0 * PI);
    let two_pi = T::lit(2.0 * PI);
    let one = T::one();
    Ok((three_pi * x1).sin().powi(2)
        + (x1 - one).powi(2) * (one + (three_pi * x2).sin().powi(2))
        + (x2 - one).powi(2) * (one + (two_pi * x2).sin().powi(2)))
}

/// Gradient of [`levy_n13`].
pub fn levy_n13_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let one = T::one();
    let two = T::lit(2.0);
    let three_pi = T::lit(3.0 * PI);
    let two_pi = T::lit(2.0 * PI);
    // d/dx sin^2(kx) = k sin(2kx)
    let d1 = three_pi * (two * three_pi * x1).sin()
        + two * (x1 - one) * (one + (three_pi * x2).sin().powi(2));
    let d2 = (x1 - one).powi(2) * three_pi * (two * three_pi * x2).sin()
        + two * (x2 - one) * (one + (two_pi * x2).sin().powi(2))
        + (x2 - one).powi(2) * two_pi * (two * two_pi * x2).sin();
    Ok(Array1::from(vec![d1, d2]))
}

/// Catalog record for [`levy_n13`].
pub fn levy_n13_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        levy_n13,
        levy_n13_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Squared sine ripples over a quadratic bowl centred at (1, 1).",
            math: r"f(\mathbf{x}) = \sin^2(3\pi x_1) + (x_1 - 1)^2[1 + \sin^2(3\pi x_2)] + (x_2 - 1)^2[1 + \sin^2(2\pi x_2)]",
            source: "Levy & Montalvo (1985), The tunneling algorithm for the global minimization of functions",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[-3.0, 4.0]),
            min_position: VectorSpec::Fixed(&[1.0, 1.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
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
    fn test_levy_n13_known_properties() {
        assert_minimum(&levy_n13_function(), 2);
    }

    #[test]
    fn test_levy_n13_gradient() {
        assert_gradient_matches(levy_n13, levy_n13_gradient, &[-3.0, 4.0]);
        assert_gradient_matches(levy_n13, levy_n13_gradient, &[0.27, 1.9]);
    }
}
