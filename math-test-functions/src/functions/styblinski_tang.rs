//! Styblinski-Tang test function

use super::prelude::*;

const NAME: &str = "styblinski_tang";
const DIM: Dimension = Dimension::scalable(1, 2);

const ARGMIN: f64 = -2.903534027766521;
const MIN_PER_DIM: f64 = -39.166165703771426;

/// Styblinski-Tang function - N-dimensional, multimodal, separable
/// Global minimum: f(x) = -39.166165703771426 n at x_i = -2.903534027766521
/// Bounds: x_i in [-5, 5]
///
/// Infinite input: +∞.
pub fn styblinski_tang<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let s: T = x
        .iter()
        .map(|&xi| xi.powi(4) - T::lit(16.0) * xi * xi + T::lit(5.0) * xi)
        .sum();
    Ok(T::lit(0.5) * s)
}

/// Gradient of [`styblinski_tang`].
pub fn styblinski_tang_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(x.mapv(|xi| T::lit(2.0) * xi.powi(3) - T::lit(16.0) * xi + T::lit(2.5)))
}

fn minimum(n: usize) -> f64 {
    MIN_PER_DIM * n as f64
}

/// Catalog record for [`styblinski_tang`].
pub fn styblinski_tang_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        styblinski_tang,
        styblinski_tang_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Separable quartic with 2^n local minima, one of them global.",
            math: r"f(\mathbf{x}) = \frac{1}{2}\sum_{i=1}^{n}\left(x_i^4 - 16x_i^2 + 5x_i\right)",
            source: "Styblinski & Tang (1990), Experiments in nonconvex optimization",
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
            start: VectorSpec::Fill(0.0),
            min_position: VectorSpec::Fill(ARGMIN),
            min_value: ValueSpec::Computed(minimum),
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
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_styblinski_tang_known_properties() {
        let f = styblinski_tang_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        assert_eq!(f.meta.min_value(3).unwrap(), 3.0 * MIN_PER_DIM);
    }

    #[test]
    fn test_styblinski_tang_gradient() {
        assert_gradient_matches(styblinski_tang, styblinski_tang_gradient, &[0.0, 1.5, -4.0]);
    }
}
