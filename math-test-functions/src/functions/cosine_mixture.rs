//! Cosine mixture test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "cosine_mixture";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Cosine mixture function - N-dimensional, multimodal, separable
/// Global minimum: f(x) = -0.1 n at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
///
/// Infinite input: +∞.
pub fn cosine_mixture<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let five_pi = T::lit(5.0 * PI);
    Ok(x.iter()
        .map(|&xi| xi * xi - T::lit(0.1) * (five_pi * xi).cos())
        .sum())
}

/// Gradient of [`cosine_mixture`].
pub fn cosine_mixture_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let five_pi = T::lit(5.0 * PI);
    Ok(x.mapv(|xi| T::lit(2.0) * xi + T::lit(0.5 * PI) * (five_pi * xi).sin()))
}

fn minimum(n: usize) -> f64 {
    -0.1 * n as f64
}

/// Catalog record for [`cosine_mixture`].
pub fn cosine_mixture_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        cosine_mixture,
        cosine_mixture_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Shallow cosine ripples on a quadratic bowl over the unit box.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} x_i^2 - 0.1\sum_{i=1}^{n}\cos(5\pi x_i)",
            source: "Breiman & Cutler (1993), A deterministic algorithm for global optimization",
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
            start: VectorSpec::Fill(0.5),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Computed(minimum),
            lb: VectorSpec::Fill(-1.0),
            ub: VectorSpec::Fill(1.0),
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
    fn test_cosine_mixture_known_properties() {
        let f = cosine_mixture_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        assert_gradient_matches(cosine_mixture, cosine_mixture_gradient, &[0.3, -0.45]);
    }
}
