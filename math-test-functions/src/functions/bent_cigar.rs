//! Bent cigar test function

use super::prelude::*;

const NAME: &str = "bent_cigar";
const DIM: Dimension = Dimension::scalable(2, 2);

/// Bent cigar function - N-dimensional, unimodal, one sensitive direction
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// Infinite input: +∞.
pub fn bent_cigar<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let tail: T = x.iter().skip(1).map(|&xi| xi * xi).sum();
    Ok(x[0] * x[0] + T::lit(1e6) * tail)
}

/// Gradient of [`bent_cigar`].
pub fn bent_cigar_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let mut grad = x.mapv(|xi| T::lit(2e6) * xi);
    grad[0] = T::lit(2.0) * x[0];
    Ok(grad)
}

/// Catalog record for [`bent_cigar`].
pub fn bent_cigar_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        bent_cigar,
        bent_cigar_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Long thin ridge: cheap along x1, steep in every other direction.",
            math: r"f(\mathbf{x}) = x_1^2 + 10^6 \sum_{i=2}^{n} x_i^2",
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
    fn test_bent_cigar_known_properties() {
        assert_eq!(bent_cigar(&Array1::<f64>::from(vec![1.0, 1.0])).unwrap(), 1_000_001.0);
        assert_gradient_matches(bent_cigar, bent_cigar_gradient, &[0.5, -0.25, 0.125]);
    }
}
