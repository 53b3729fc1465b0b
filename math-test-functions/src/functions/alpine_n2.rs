//! Alpine N.2 test function

use super::prelude::*;

const NAME: &str = "alpine_n2";
const DIM: Dimension = Dimension::scalable(1, 2);

const ARGMIN: f64 = 7.917052689434372;
const FACTOR: f64 = 2.8081311800070052;

/// Alpine N.2 function - N-dimensional, multimodal, defined for x_i >= 0
/// Global minimum: f(x) = -2.8081311800070052^n at x_i = 7.917052689434372
/// Bounds: x_i in [0, 10]
///
/// Negative coordinates are outside the domain and are rejected.
/// Infinite input: NaN (+∞ coordinates oscillate without limit).
pub fn alpine_n2<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    require_non_negative(NAME, x)?;
    if has_inf(x) {
        return Ok(T::nan());
    }
    let p: T = x.iter().map(|&xi| factor(xi)).product();
    Ok(-p)
}

fn factor<T: Scalar>(xi: T) -> T {
    xi.sqrt() * xi.sin()
}

/// d/dx [sqrt(x) sin x], continued by its limit 0 at x = 0.
fn factor_slope<T: Scalar>(xi: T) -> T {
    if xi == T::zero() {
        return T::zero();
    }
    let r = xi.sqrt();
    xi.sin() / (T::lit(2.0) * r) + r * xi.cos()
}

/// Gradient of [`alpine_n2`].
pub fn alpine_n2_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    require_non_negative(NAME, x)?;
    if has_inf(x) {
        return Ok(nan_vector(n));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        let others: T = x
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &xj)| factor(xj))
            .product();
        -others * factor_slope(x[i])
    }))
}

fn minimum(n: usize) -> f64 {
    -FACTOR.powi(n as i32)
}

/// Catalog record for [`alpine_n2`].
pub fn alpine_n2_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        alpine_n2,
        alpine_n2_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Product of square-root-weighted sines; the minimum deepens geometrically with n.",
            math: r"f(\mathbf{x}) = -\prod_{i=1}^{n}\sqrt{x_i}\sin x_i",
            source: "Clerc (1999), The swarm and the queen: towards a deterministic and adaptive particle swarm optimization",
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
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(ARGMIN),
            min_value: ValueSpec::Computed(minimum),
            lb: VectorSpec::Fill(0.0),
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

    #[test]
    fn test_alpine_n2_known_properties() {
        let f = alpine_n2_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        assert!((f.meta.min_value(2).unwrap() + 7.885600724127536).abs() < 1e-9);
    }

    #[test]
    fn test_alpine_n2_rejects_negative_input() {
        let err = alpine_n2(&Array1::<f64>::from(vec![1.0, -0.5])).unwrap_err();
        assert!(err.is_domain_error());
        assert!(alpine_n2_gradient(&Array1::<f64>::from(vec![f64::NEG_INFINITY])).is_err());
    }

    #[test]
    fn test_alpine_n2_gradient() {
        assert_gradient_matches(alpine_n2, alpine_n2_gradient, &[1.0, 2.5, 7.0]);
    }
}
