//! Brown test function

use super::prelude::*;

const NAME: &str = "brown";
const DIM: Dimension = Dimension::scalable(2, 2);

/// Brown function - N-dimensional, unimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 4]
///
/// Infinite input: +∞.
pub fn brown<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let mut sum = T::zero();
    for i in 0..n - 1 {
        let (a, b) = (x[i] * x[i], x[i + 1] * x[i + 1]);
        sum += a.powf(b + T::one()) + b.powf(a + T::one());
    }
    Ok(sum)
}

/// `u^(v + 1) ln u`, continued by its limit 0 at `u = 0`.
fn exponent_slope<T: Scalar>(u: T, v: T) -> T {
    if u == T::zero() {
        T::zero()
    } else {
        u.powf(v + T::one()) * u.ln()
    }
}

/// Gradient of [`brown`].
pub fn brown_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let two = T::lit(2.0);
    let mut grad = Array1::zeros(n);
    for i in 0..n - 1 {
        let (xi, xj) = (x[i], x[i + 1]);
        let (a, b) = (xi * xi, xj * xj);
        // a^(b + 1)
        grad[i] += (b + T::one()) * a.powf(b) * two * xi;
        grad[i + 1] += exponent_slope(a, b) * two * xj;
        // b^(a + 1)
        grad[i + 1] += (a + T::one()) * b.powf(a) * two * xj;
        grad[i] += exponent_slope(b, a) * two * xi;
    }
    Ok(grad)
}

/// Catalog record for [`brown`].
pub fn brown_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        brown,
        brown_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Chained terms with coordinate-dependent exponents.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n-1} \left[(x_i^2)^{x_{i+1}^2 + 1} + (x_{i+1}^2)^{x_i^2 + 1}\right]",
            source: "Begambre & Laier (2009), A hybrid particle swarm optimization simplex algorithm",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-1.0),
            ub: VectorSpec::Fill(4.0),
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
    fn test_brown_known_properties() {
        let f = brown_function::<f64>();
        assert_minimum(&f, 2);
        assert_minimum(&f, 7);
        assert_eq!(brown(&Array1::<f64>::from(vec![1.0, 1.0, 1.0])).unwrap(), 4.0);
        assert_eq!(brown_gradient(&Array1::<f64>::zeros(3)).unwrap(), Array1::<f64>::zeros(3));
    }

    #[test]
    fn test_brown_gradient() {
        assert_gradient_matches(brown, brown_gradient, &[0.4, -0.9, 1.3]);
    }
}
