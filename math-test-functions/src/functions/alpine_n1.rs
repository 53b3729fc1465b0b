//! Alpine N.1 test function

use super::prelude::*;

const NAME: &str = "alpine_n1";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Alpine N.1 function - N-dimensional, multimodal, non-smooth
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
///
/// Kinks use the zero subgradient `sign(0) = 0`.
/// Infinite input: NaN, the oscillation has no limit.
pub fn alpine_n1<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    Ok(x.iter().map(|&xi| term(xi).abs()).sum())
}

fn term<T: Scalar>(xi: T) -> T {
    xi * xi.sin() + T::lit(0.1) * xi
}

/// Gradient of [`alpine_n1`].
pub fn alpine_n1_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    Ok(x.mapv(|xi| sign(term(xi)) * (xi.sin() + xi * xi.cos() + T::lit(0.1))))
}

/// Catalog record for [`alpine_n1`].
pub fn alpine_n1_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        alpine_n1,
        alpine_n1_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Absolute value of a growing sinusoid; kinked at every root.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}\left|x_i \sin x_i + 0.1 x_i\right|",
            source: "Rahnamayan, Tizhoosh & Salama (2007), A novel population initialization method for accelerating evolutionary algorithms",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::PartiallyDifferentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
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

    #[test]
    fn test_alpine_n1_known_properties() {
        let f = alpine_n1_function::<f64>();
        assert_minimum(&f, 3);
        assert_eq!(alpine_n1_gradient(&Array1::<f64>::zeros(2)).unwrap(), Array1::<f64>::zeros(2));
        assert_gradient_matches(alpine_n1, alpine_n1_gradient, &[1.0, -2.2, 4.5]);
    }
}
