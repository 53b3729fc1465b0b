//! Exponential test function

use super::prelude::*;

const NAME: &str = "exponential";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Exponential function - N-dimensional, unimodal
/// Global minimum: f(x) = -1 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
///
/// Infinite input: 0, the limit of the Gaussian; gradient is zero.
pub fn exponential<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::zero());
    }
    Ok(-gaussian(x))
}

fn gaussian<T: Scalar>(x: &Array1<T>) -> T {
    let r: T = x.iter().map(|&xi| xi * xi).sum();
    (T::lit(-0.5) * r).exp()
}

/// Gradient of [`exponential`].
pub fn exponential_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(Array1::zeros(n));
    }
    let g = gaussian(x);
    Ok(x.mapv(|xi| xi * g))
}

/// Catalog record for [`exponential`].
pub fn exponential_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        exponential,
        exponential_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Inverted Gaussian bell; gradients vanish far from the origin.",
            math: r"f(\mathbf{x}) = -\exp\left(-0.5\sum_{i=1}^{n} x_i^2\right)",
            source: "Rahnamayan, Tizhoosh & Salama (2007), Opposition-based differential evolution",
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
            start: VectorSpec::Fill(0.5),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(-1.0),
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
    fn test_exponential_known_properties() {
        let f = exponential_function::<f64>();
        assert_minimum(&f, 1);
        assert_minimum(&f, 10);
        let x = Array1::<f64>::from(vec![f64::INFINITY, 0.0]);
        assert_eq!(exponential(&x).unwrap(), 0.0);
        assert_eq!(exponential_gradient(&x).unwrap(), Array1::<f64>::zeros(2));
    }

    #[test]
    fn test_exponential_gradient() {
        assert_gradient_matches(exponential, exponential_gradient, &[0.5, -0.3, 0.8]);
    }
}
