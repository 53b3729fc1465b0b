//! Three-hump camel test function

use super::prelude::*;

const NAME: &str = "three_hump_camel";
const DIM: Dimension = Dimension::Fixed(2);

/// Three-hump camel function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
///
/// Infinite input: +∞.
pub fn three_hump_camel<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(T::lit(2.0) * x1.powi(2) - T::lit(1.05) * x1.powi(4) + x1.powi(6) / T::lit(6.0)
        + x1 * x2
        + x2.powi(2))
}

/// Gradient of [`three_hump_camel`].
pub fn three_hump_camel_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(Array1::from(vec![
        T::lit(4.0) * x1 - T::lit(4.2) * x1.powi(3) + x1.powi(5) + x2,
        x1 + T::lit(2.0) * x2,
    ]))
}

/// Catalog record for [`three_hump_camel`].
pub fn three_hump_camel_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        three_hump_camel,
        three_hump_camel_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Three local minima along the x1 axis, the middle one global.",
            math: r"f(\mathbf{x}) = 2x_1^2 - 1.05x_1^4 + \frac{x_1^6}{6} + x_1 x_2 + x_2^2",
            source: "Jamil & Yang (2013), A literature survey of benchmark functions for global optimisation problems",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[2.0, 2.0]),
            min_position: VectorSpec::Fixed(&[0.0, 0.0]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-5.0),
            ub: VectorSpec::Fill(5.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_gradient_matches;

    #[test]
    fn test_three_hump_camel_gradient() {
        assert_gradient_matches(three_hump_camel, three_hump_camel_gradient, &[1.3, -0.4]);
        assert_gradient_matches(three_hump_camel, three_hump_camel_gradient, &[-1.75, 0.87]);
    }
}
