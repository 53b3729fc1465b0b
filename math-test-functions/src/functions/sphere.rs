//! Sphere test function

use super::prelude::*;

const NAME: &str = "sphere";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Sphere function - N-dimensional, unimodal, convex, separable
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
///
/// Infinite input: +∞.
pub fn sphere<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter().map(|&xi| xi * xi).sum())
}

/// Gradient of [`sphere`].
pub fn sphere_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(x.mapv(|xi| T::lit(2.0) * xi))
}

/// Catalog record for [`sphere`].
pub fn sphere_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        sphere,
        sphere_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Sum of squares; the simplest convex bowl.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} x_i^2",
            source: "De Jong (1975), An analysis of the behavior of a class of genetic adaptive systems",
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
            lb: VectorSpec::Fill(-5.12),
            ub: VectorSpec::Fill(5.12),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}
