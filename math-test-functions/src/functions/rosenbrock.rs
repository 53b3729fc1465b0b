//! Rosenbrock test function

use super::prelude::*;

const NAME: &str = "rosenbrock";
const DIM: Dimension = Dimension::scalable(2, 2);

/// Rosenbrock function - N-dimensional
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 10]
///
/// Infinite input: +∞.
pub fn rosenbrock<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let mut sum = T::zero();
    for i in 0..n - 1 {
        let xi = x[i];
        let xi_plus_1 = x[i + 1];
        sum += T::lit(100.0) * (xi_plus_1 - xi * xi).powi(2) + (T::one() - xi).powi(2);
    }
    Ok(sum)
}

/// Gradient of [`rosenbrock`].
pub fn rosenbrock_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let mut grad = Array1::zeros(n);
    for i in 0..n - 1 {
        let r = x[i + 1] - x[i] * x[i];
        grad[i] += T::lit(-400.0) * x[i] * r - T::lit(2.0) * (T::one() - x[i]);
        grad[i + 1] += T::lit(200.0) * r;
    }
    Ok(grad)
}

/// Catalog record for [`rosenbrock`].
pub fn rosenbrock_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        rosenbrock,
        rosenbrock_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Curved narrow valley; easy to find, hard to follow to the minimum.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n-1} \left[100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2\right]",
            source: "Rosenbrock (1960), An automatic method for finding the greatest or least value of a function",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(0.0),
            min_position: VectorSpec::Fill(1.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-5.0),
            ub: VectorSpec::Fill(10.0),
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
    fn test_rosenbrock_known_values() {
        assert_eq!(rosenbrock(&Array1::<f64>::from(vec![1.0, 1.0])).unwrap(), 0.0);
        assert_eq!(rosenbrock(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap(), 1.0);
        assert_eq!(
            rosenbrock_gradient(&Array1::<f64>::from(vec![1.0, 1.0])).unwrap(),
            Array1::<f64>::from(vec![0.0, 0.0])
        );
        let f = rosenbrock_function::<f64>();
        for n in [2, 5, 10] {
            assert_minimum(&f, n);
        }
    }

    #[test]
    fn test_rosenbrock_gradient() {
        assert_gradient_matches(rosenbrock, rosenbrock_gradient, &[-1.2, 1.0]);
        assert_gradient_matches(rosenbrock, rosenbrock_gradient, &[0.5, -0.3, 2.0, 1.7]);
    }

    #[test]
    fn test_rosenbrock_requires_two_dimensions() {
        let err = rosenbrock(&Array1::<f64>::from(vec![1.0])).unwrap_err();
        assert!(matches!(
            err,
            TestFunctionError::DimensionTooSmall { min: 2, got: 1, .. }
        ));
    }
}
