//! High-conditioned elliptic test function

use super::prelude::*;

const NAME: &str = "elliptic";
const DIM: Dimension = Dimension::scalable(2, 2);

/// Weight of coordinate `i`: condition number 1e6 spread geometrically.
fn weight<T: Scalar>(i: usize, n: usize) -> T {
    T::lit(1e6_f64.powf(i as f64 / (n - 1) as f64))
}

/// High-conditioned elliptic function - N-dimensional, unimodal, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: +∞.
pub fn elliptic<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter()
        .enumerate()
        .map(|(i, &xi)| weight::<T>(i, n) * xi * xi)
        .sum())
}

/// Gradient of [`elliptic`].
pub fn elliptic_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        T::lit(2.0) * weight::<T>(i, n) * x[i]
    }))
}

/// Catalog record for [`elliptic`].
pub fn elliptic_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        elliptic,
        elliptic_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Axis-aligned ellipsoid with condition number 1e6.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} (10^6)^{\frac{i-1}{n-1}} x_i^2",
            source: "Suganthan et al. (2005), CEC 2005 special session on real-parameter optimization",
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
            lb: VectorSpec::Fill(-100.0),
            ub: VectorSpec::Fill(100.0),
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
    fn test_elliptic_conditioning() {
        let v = elliptic(&Array1::<f64>::from(vec![1.0, 1.0])).unwrap();
        assert!((v - 1_000_001.0).abs() < 1e-6);
        let v = elliptic(&Array1::<f64>::from(vec![0.0, 0.0, 1.0])).unwrap();
        assert!((v - 1e6).abs() < 1e-6);
        assert_gradient_matches(elliptic, elliptic_gradient, &[0.1, -0.2, 0.3]);
    }
}
