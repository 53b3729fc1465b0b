//! Rastrigin test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "rastrigin";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Rastrigin function - N-dimensional, highly multimodal, separable
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
///
/// Infinite input: +∞.
pub fn rastrigin<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let a = T::lit(10.0);
    let two_pi = T::lit(2.0 * PI);
    Ok(x.iter()
        .map(|&xi| xi * xi - a * (two_pi * xi).cos() + a)
        .sum())
}

/// Gradient of [`rastrigin`].
pub fn rastrigin_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let two_pi = T::lit(2.0 * PI);
    Ok(x.mapv(|xi| T::lit(2.0) * xi + T::lit(20.0 * PI) * (two_pi * xi).sin()))
}

/// Catalog record for [`rastrigin`].
pub fn rastrigin_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        rastrigin,
        rastrigin_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Regular grid of local minima on top of a quadratic bowl.",
            math: r"f(\mathbf{x}) = 10n + \sum_{i=1}^{n}\left[x_i^2 - 10\cos(2\pi x_i)\right]",
            source: "Rastrigin (1974), Systems of Extremal Control",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(2.5),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-5.12),
            ub: VectorSpec::Fill(5.12),
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
    fn test_rastrigin_known_properties() {
        let f = rastrigin_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        // every integer lattice point is a local minimum with value sum x_i^2
        let v = rastrigin(&Array1::<f64>::from(vec![1.0, -2.0])).unwrap();
        assert!((v - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rastrigin_gradient() {
        assert_gradient_matches(rastrigin, rastrigin_gradient, &[2.5, -0.3, 1.1]);
    }
}
