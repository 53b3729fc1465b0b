//! Zakharov test function

use super::prelude::*;

const NAME: &str = "zakharov";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Zakharov function - N-dimensional, unimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
///
/// Infinite input: +∞.
pub fn zakharov<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let squares: T = x.iter().map(|&xi| xi * xi).sum();
    let s = weighted_sum(x);
    Ok(squares + s.powi(2) + s.powi(4))
}

/// `sum 0.5 i x_i`
fn weighted_sum<T: Scalar>(x: &Array1<T>) -> T {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| T::lit(0.5) * T::from_usize(i + 1) * xi)
        .sum()
}

/// Gradient of [`zakharov`].
pub fn zakharov_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let s = weighted_sum(x);
    let outer = s + T::lit(2.0) * s.powi(3);
    Ok(Array1::from_shape_fn(n, |i| {
        T::lit(2.0) * x[i] + T::from_usize(i + 1) * outer
    }))
}

/// Catalog record for [`zakharov`].
pub fn zakharov_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        zakharov,
        zakharov_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Plate-shaped bowl with a steep quartic term along the weighted diagonal.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} x_i^2 + \left(\sum_{i=1}^{n} 0.5 i x_i\right)^2 + \left(\sum_{i=1}^{n} 0.5 i x_i\right)^4",
            source: "Zakharov, via Jamil & Yang (2013)",
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
            start: VectorSpec::Fill(1.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-5.0),
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
    fn test_zakharov_known_properties() {
        let f = zakharov_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        // 2 + 1.5^2 + 1.5^4
        let v = zakharov(&Array1::<f64>::from(vec![1.0, 1.0])).unwrap();
        assert!((v - 9.3125).abs() < 1e-12);
    }

    #[test]
    fn test_zakharov_gradient() {
        assert_gradient_matches(zakharov, zakharov_gradient, &[0.7, -0.2, 1.1]);
    }
}
