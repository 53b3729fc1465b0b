//! Booth test function

use super::prelude::*;

const NAME: &str = "booth";
const DIM: Dimension = Dimension::Fixed(2);

/// Booth function - 2D, unimodal, convex
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn booth<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    let a = x1 + T::lit(2.0) * x2 - T::lit(7.0);
    let b = T::lit(2.0) * x1 + x2 - T::lit(5.0);
    Ok(a * a + b * b)
}

/// Gradient of [`booth`].
pub fn booth_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let a = x1 + T::lit(2.0) * x2 - T::lit(7.0);
    let b = T::lit(2.0) * x1 + x2 - T::lit(5.0);
    Ok(Array1::from(vec![
        T::lit(2.0) * a + T::lit(4.0) * b,
        T::lit(4.0) * a + T::lit(2.0) * b,
    ]))
}

/// Catalog record for [`booth`].
pub fn booth_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        booth,
        booth_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Plate-shaped quadratic bowl with its minimum at (1, 3).",
            math: r"f(\mathbf{x}) = (x_1 + 2x_2 - 7)^2 + (2x_1 + x_2 - 5)^2",
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
            start: VectorSpec::Fixed(&[0.0, 0.0]),
            min_position: VectorSpec::Fixed(&[1.0, 3.0]),
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
    fn test_booth_known_properties() {
        let f = booth_function::<f64>();
        assert_minimum(&f, 2);
        assert_eq!(f.meta.min_position(2).unwrap(), Array1::<f64>::from(vec![1.0, 3.0]));
        assert_eq!(booth(&Array1::<f64>::from(vec![1.0, 3.0])).unwrap(), 0.0);
        assert_eq!(booth(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap(), 74.0);
    }

    #[test]
    fn test_booth_gradient() {
        let g = booth_gradient(&Array1::<f64>::from(vec![1.0, 3.0])).unwrap();
        assert_eq!(g, Array1::<f64>::from(vec![0.0, 0.0]));
        assert_gradient_matches(booth, booth_gradient, &[-2.5, 4.0]);
    }

    #[test]
    fn test_booth_rejects_wrong_dimension() {
        let err = booth(&Array1::<f64>::from(vec![1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(
            err,
            TestFunctionError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            }
        ));
        assert!(booth_gradient::<f64>(&Array1::<f64>::from(vec![])).is_err());
    }
}
