//! Powell singular test function

use super::prelude::*;

const NAME: &str = "powell";
const DIM: Dimension = Dimension::Scalable {
    min: 4,
    step: 4,
    default: 4,
};

/// Powell singular function - N-dimensional with n a multiple of 4
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-4, 5]
///
/// The Hessian is singular at the minimizer.
/// Infinite input: +∞.
pub fn powell<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let mut sum = T::zero();
    for k in (0..n).step_by(4) {
        let (a, b, c, d) = (x[k], x[k + 1], x[k + 2], x[k + 3]);
        sum += (a + T::lit(10.0) * b).powi(2)
            + T::lit(5.0) * (c - d).powi(2)
            + (b - T::lit(2.0) * c).powi(4)
            + T::lit(10.0) * (a - d).powi(4);
    }
    Ok(sum)
}

/// Gradient of [`powell`].
pub fn powell_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let mut grad = Array1::zeros(n);
    for k in (0..n).step_by(4) {
        let (a, b, c, d) = (x[k], x[k + 1], x[k + 2], x[k + 3]);
        let p = a + T::lit(10.0) * b;
        let q = c - d;
        let r = (b - T::lit(2.0) * c).powi(3);
        let s = (a - d).powi(3);
        grad[k] = T::lit(2.0) * p + T::lit(40.0) * s;
        grad[k + 1] = T::lit(20.0) * p + T::lit(4.0) * r;
        grad[k + 2] = T::lit(10.0) * q - T::lit(8.0) * r;
        grad[k + 3] = T::lit(-10.0) * q - T::lit(40.0) * s;
    }
    Ok(grad)
}

fn start(n: usize) -> Array1<f64> {
    const BLOCK: [f64; 4] = [3.0, -1.0, 0.0, 1.0];
    Array1::from_shape_fn(n, |i| BLOCK[i % 4])
}

/// Catalog record for [`powell`].
pub fn powell_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        powell,
        powell_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Blocks of four coupled variables with a singular Hessian at the minimum.",
            math: r"f(\mathbf{x}) = \sum_{k=1}^{n/4}\left[(x_{4k-3} + 10x_{4k-2})^2 + 5(x_{4k-1} - x_{4k})^2 + (x_{4k-2} - 2x_{4k-1})^4 + 10(x_{4k-3} - x_{4k})^4\right]",
            source: "Powell (1962), An iterative method for finding stationary values of a function of several variables",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Computed(start),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-4.0),
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
    fn test_powell_known_values() {
        let f = powell_function::<f64>();
        assert_minimum(&f, 4);
        assert_minimum(&f, 8);
        assert_eq!(powell(&start(4)).unwrap(), 215.0);
        assert_eq!(powell(&start(8)).unwrap(), 430.0);
    }

    #[test]
    fn test_powell_dimension_must_be_multiple_of_four() {
        let err = powell(&Array1::<f64>::from(vec![0.0; 6])).unwrap_err();
        assert!(matches!(
            err,
            TestFunctionError::DimensionStep { min: 4, step: 4, got: 6, .. }
        ));
        assert!(powell(&Array1::<f64>::from(vec![f64::NAN; 4])).unwrap().is_nan());
    }

    #[test]
    fn test_powell_gradient() {
        assert_gradient_matches(powell, powell_gradient, &[3.0, -1.0, 0.0, 1.0]);
        assert_gradient_matches(powell, powell_gradient, &[0.5, 1.5, -0.7, 2.0, 1.0, 0.1, 0.2, -0.3]);
    }
}
