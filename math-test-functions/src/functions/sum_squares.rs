//! Sum of squares test function

use super::prelude::*;

const NAME: &str = "sum_squares";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Sum squares function - N-dimensional, weighted sphere
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: +∞.
pub fn sum_squares<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter()
        .enumerate()
        .map(|(i, &xi)| T::from_usize(i + 1) * xi * xi)
        .sum())
}

/// Gradient of [`sum_squares`].
pub fn sum_squares_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        T::lit(2.0) * T::from_usize(i + 1) * x[i]
    }))
}

/// Catalog record for [`sum_squares`].
pub fn sum_squares_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        sum_squares,
        sum_squares_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Axis-aligned ellipsoid with weights growing linearly with the index.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} i x_i^2",
            source: "Jamil & Yang (2013), A literature survey of benchmark functions for global optimisation problems",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}
