//! Levy test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "levy";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Levy function - N-dimensional, multimodal
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-10, 10]
///
/// Uses w_i = 1 + (x_i - 1) / 4.
/// Infinite input: +∞.
pub fn levy<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let w = x.mapv(to_w);
    let pi = T::lit(PI);
    let mut sum = (pi * w[0]).sin().powi(2);
    for i in 0..n - 1 {
        let s = (pi * w[i] + T::one()).sin();
        sum += (w[i] - T::one()).powi(2) * (T::one() + T::lit(10.0) * s * s);
    }
    let last = w[n - 1];
    let s = (T::lit(2.0) * pi * last).sin();
    sum += (last - T::one()).powi(2) * (T::one() + s * s);
    Ok(sum)
}

fn to_w<T: Scalar>(xi: T) -> T {
    T::one() + (xi - T::one()) / T::lit(4.0)
}

/// Gradient of [`levy`].
pub fn levy_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let w = x.mapv(to_w);
    let pi = T::lit(PI);
    let two = T::lit(2.0);
    // derivatives with respect to w, scaled by dw/dx = 1/4 at the end
    let mut grad = Array1::zeros(n);
    grad[0] += pi * (two * pi * w[0]).sin();
    for i in 0..n - 1 {
        let d = w[i] - T::one();
        let phase = pi * w[i] + T::one();
        grad[i] += two * d * (T::one() + T::lit(10.0) * phase.sin().powi(2))
            + d * d * T::lit(10.0) * pi * (two * phase).sin();
    }
    let d = w[n - 1] - T::one();
    let phase = two * pi * w[n - 1];
    grad[n - 1] += two * d * (T::one() + phase.sin().powi(2)) + d * d * two * pi * (two * phase).sin();
    Ok(grad.mapv(|g: T| g / T::lit(4.0)))
}

/// Catalog record for [`levy`].
pub fn levy_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        levy,
        levy_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Sine-modulated chain of quadratic valleys in the rescaled variables w.",
            math: r"f(\mathbf{x}) = \sin^2(\pi w_1) + \sum_{i=1}^{n-1}(w_i - 1)^2\left[1 + 10\sin^2(\pi w_i + 1)\right] + (w_n - 1)^2\left[1 + \sin^2(2\pi w_n)\right]",
            source: "Levy & Montalvo (1985), The tunneling algorithm for the global minimization of functions",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
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
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};
    use approx::assert_relative_eq;

    #[test]
    fn test_levy_known_values() {
        let f = levy_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        let v = levy(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap();
        assert_relative_eq!(v, 0.7158445541169746, epsilon = 1e-12);
    }

    #[test]
    fn test_levy_gradient() {
        assert_gradient_matches(levy, levy_gradient, &[0.3, -2.0, 4.4]);
        assert_gradient_matches(levy, levy_gradient, &[2.7]);
    }
}
