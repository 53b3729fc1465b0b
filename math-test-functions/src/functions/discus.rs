//! Discus test function

use super::prelude::*;

const NAME: &str = "discus";
const DIM: Dimension = Dimension::scalable(2, 2);

/// Discus function - N-dimensional, unimodal, one steep direction
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: +∞.
pub fn discus<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let tail: T = x.iter().skip(1).map(|&xi| xi * xi).sum();
    Ok(T::lit(1e6) * x[0] * x[0] + tail)
}

/// Gradient of [`discus`].
pub fn discus_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let mut grad = x.mapv(|xi| T::lit(2.0) * xi);
    grad[0] = T::lit(2e6) * x[0];
    Ok(grad)
}

/// Catalog record for [`discus`].
pub fn discus_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        discus,
        discus_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Flat disc: steep along x1, shallow in every other direction.",
            math: r"f(\mathbf{x}) = 10^6 x_1^2 + \sum_{i=2}^{n} x_i^2",
            source: "Hansen et al. (2009), Real-parameter black-box optimization benchmarking",
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
    fn test_discus_known_properties() {
        assert_eq!(discus(&Array1::<f64>::from(vec![1.0, 1.0, 1.0])).unwrap(), 1_000_002.0);
        assert_gradient_matches(discus, discus_gradient, &[0.5, -0.25, 0.125]);
    }
}
