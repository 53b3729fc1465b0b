//! Colville test function

use super::prelude::*;

const NAME: &str = "colville";
const DIM: Dimension = Dimension::Fixed(4);

/// Colville function - 4D, two coupled Rosenbrock-like valleys
/// Global minimum: f(x) = 0 at x = (1, 1, 1, 1)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn colville<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let l = T::lit;
    let one = T::one();
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    Ok(l(100.0) * (x1 * x1 - x2).powi(2)
        + (x1 - one).powi(2)
        + (x3 - one).powi(2)
        + l(90.0) * (x3 * x3 - x4).powi(2)
        + l(10.1) * ((x2 - one).powi(2) + (x4 - one).powi(2))
        + l(19.8) * (x2 - one) * (x4 - one))
}

/// Gradient of [`colville`].
pub fn colville_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let l = T::lit;
    let one = T::one();
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    let r1 = x1 * x1 - x2;
    let r3 = x3 * x3 - x4;
    Ok(Array1::from(vec![
        l(400.0) * x1 * r1 + l(2.0) * (x1 - one),
        l(-200.0) * r1 + l(20.2) * (x2 - one) + l(19.8) * (x4 - one),
        l(2.0) * (x3 - one) + l(360.0) * x3 * r3,
        l(-180.0) * r3 + l(20.2) * (x4 - one) + l(19.8) * (x2 - one),
    ]))
}

/// Catalog record for [`colville`].
pub fn colville_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        colville,
        colville_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Two Rosenbrock valleys coupled through a bilinear term.",
            math: r"f(\mathbf{x}) = 100(x_1^2 - x_2)^2 + (x_1 - 1)^2 + (x_3 - 1)^2 + 90(x_3^2 - x_4)^2 + 10.1[(x_2 - 1)^2 + (x_4 - 1)^2] + 19.8(x_2 - 1)(x_4 - 1)",
            source: "Colville (1968), A comparative study on nonlinear programming codes",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(0.0),
            min_position: VectorSpec::Fill(1.0),
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
    fn test_colville_known_properties() {
        assert_minimum(&colville_function(), 4);
        assert!((colville(&Array1::<f64>::zeros(4)).unwrap() - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_colville_gradient() {
        assert_gradient_matches(colville, colville_gradient, &[0.3, -0.5, 1.7, 2.2]);
    }
}
