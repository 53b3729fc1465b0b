//! Rotated hyper-ellipsoid test function

use super::prelude::*;

const NAME: &str = "rotated_hyper_ellipsoid";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Rotated hyper-ellipsoid function - N-dimensional, unimodal, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-65.536, 65.536]
///
/// Infinite input: +∞.
pub fn rotated_hyper_ellipsoid<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    // sum of prefix sums of squares
    let mut prefix = T::zero();
    let mut total = T::zero();
    for &xi in x.iter() {
        prefix += xi * xi;
        total += prefix;
    }
    Ok(total)
}

/// Gradient of [`rotated_hyper_ellipsoid`].
pub fn rotated_hyper_ellipsoid_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    // x_j appears in the prefix sums j..n
    Ok(Array1::from_shape_fn(n, |j| {
        T::lit(2.0) * T::from_usize(n - j) * x[j]
    }))
}

/// Catalog record for [`rotated_hyper_ellipsoid`].
pub fn rotated_hyper_ellipsoid_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        rotated_hyper_ellipsoid,
        rotated_hyper_ellipsoid_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Nested sums of squares; the first coordinate carries the largest weight.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}\sum_{j=1}^{i} x_j^2",
            source: "Molga & Smutnicki (2005), Test functions for optimization needs",
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
            lb: VectorSpec::Fill(-65.536),
            ub: VectorSpec::Fill(65.536),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_rotated_hyper_ellipsoid_known_properties() {
        let f = rotated_hyper_ellipsoid_function::<f64>();
        assert_minimum(&f, 5);
        // 1 + 2 + 3
        assert_eq!(rotated_hyper_ellipsoid(&Array1::<f64>::from(vec![1.0, 1.0, 1.0])).unwrap(), 6.0);
    }

    #[test]
    fn test_rotated_hyper_ellipsoid_gradient() {
        assert_gradient_matches(
            rotated_hyper_ellipsoid,
            rotated_hyper_ellipsoid_gradient,
            &[1.0, -2.0, 0.5],
        );
    }
}
