//! Xin-She Yang N.2 test function

use super::prelude::*;

const NAME: &str = "xin_she_yang_n2";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Xin-She Yang N.2 function - N-dimensional, multimodal, non-smooth
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-2π, 2π]
///
/// Kinks use the zero subgradient `sign(0) = 0`.
/// Infinite input: +∞.
pub fn xin_she_yang_n2<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let s: T = x.iter().map(|xi| xi.abs()).sum();
    Ok(s * damping(x))
}

/// `exp(-sum sin(x_i^2))`
fn damping<T: Scalar>(x: &Array1<T>) -> T {
    let s: T = x.iter().map(|&xi| (xi * xi).sin()).sum();
    (-s).exp()
}

/// Gradient of [`xin_she_yang_n2`].
pub fn xin_she_yang_n2_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let s: T = x.iter().map(|xi| xi.abs()).sum();
    let e = damping(x);
    Ok(x.mapv(|xi| e * (sign(xi) - s * T::lit(2.0) * xi * (xi * xi).cos())))
}

/// Catalog record for [`xin_she_yang_n2`].
pub fn xin_she_yang_n2_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        xin_she_yang_n2,
        xin_she_yang_n2_gradient,
        FunctionMetadata {
            name: NAME,
            description: "L1 norm modulated by an oscillating exponential envelope.",
            math: r"f(\mathbf{x}) = \left(\sum_{i=1}^{n}|x_i|\right)\exp\left(-\sum_{i=1}^{n}\sin(x_i^2)\right)",
            source: "Yang (2010), Engineering Optimization: An Introduction with Metaheuristic Applications",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-2.0 * std::f64::consts::PI),
            ub: VectorSpec::Fill(2.0 * std::f64::consts::PI),
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
    fn test_xin_she_yang_n2_known_properties() {
        assert_minimum(&xin_she_yang_n2_function(), 4);
        assert_gradient_matches(xin_she_yang_n2, xin_she_yang_n2_gradient, &[1.0, -0.6, 2.2]);
    }
}
