//! Matyas test function

use super::prelude::*;

const NAME: &str = "matyas";
const DIM: Dimension = Dimension::Fixed(2);

/// Matyas function - 2D, unimodal, convex
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn matyas<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(T::lit(0.26) * (x1 * x1 + x2 * x2) - T::lit(0.48) * x1 * x2)
}

/// Gradient of [`matyas`].
pub fn matyas_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(Array1::from(vec![
        T::lit(0.52) * x1 - T::lit(0.48) * x2,
        T::lit(0.52) * x2 - T::lit(0.48) * x1,
    ]))
}

/// Catalog record for [`matyas`].
pub fn matyas_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        matyas,
        matyas_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Flat, slightly rotated quadratic bowl.",
            math: r"f(\mathbf{x}) = 0.26 (x_1^2 + x_2^2) - 0.48 x_1 x_2",
            source: "Jamil & Yang (2013), A literature survey of benchmark functions for global optimisation problems",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 2.0]),
            min_position: VectorSpec::Fixed(&[0.0, 0.0]),
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
    use crate::test_support::assert_gradient_matches;

    #[test]
    fn test_matyas_origin() {
        let origin = Array1::<f64>::from(vec![0.0, 0.0]);
        assert_eq!(matyas(&origin).unwrap(), 0.0);
        assert_eq!(matyas_gradient(&origin).unwrap(), Array1::<f64>::from(vec![0.0, 0.0]));
        assert_gradient_matches(matyas, matyas_gradient, &[3.0, -7.5]);
    }
}
