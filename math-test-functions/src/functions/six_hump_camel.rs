//! Six-hump camel test function

use super::prelude::*;

const NAME: &str = "six_hump_camel";
const DIM: Dimension = Dimension::Fixed(2);

/// Six-hump camel function - 2D multimodal, two global minima
/// Global minimum: f(x) = -1.0316284534898774 at x = (±0.0898420131, ∓0.7126564030)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
///
/// Infinite input: +∞.
pub fn six_hump_camel<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (x1, x2) = (x[0], x[1]);
    let x1_sq = x1 * x1;
    let x2_sq = x2 * x2;
    Ok((T::lit(4.0) - T::lit(2.1) * x1_sq + x1_sq * x1_sq / T::lit(3.0)) * x1_sq
        + x1 * x2
        + (T::lit(-4.0) + T::lit(4.0) * x2_sq) * x2_sq)
}

/// Gradient of [`six_hump_camel`].
pub fn six_hump_camel_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(Array1::from(vec![
        T::lit(8.0) * x1 - T::lit(8.4) * x1.powi(3) + T::lit(2.0) * x1.powi(5) + x2,
        x1 - T::lit(8.0) * x2 + T::lit(16.0) * x2.powi(3),
    ]))
}

/// Catalog record for [`six_hump_camel`].
pub fn six_hump_camel_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        six_hump_camel,
        six_hump_camel_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Six local minima, two of them global and symmetric about the origin.",
            math: r"f(\mathbf{x}) = \left(4 - 2.1x_1^2 + \frac{x_1^4}{3}\right)x_1^2 + x_1 x_2 + (-4 + 4x_2^2)x_2^2",
            source: "Dixon & Szegö (1978), The global optimization problem: an introduction",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[0.0, 0.0]),
            min_position: VectorSpec::Fixed(&[0.08984201312424386, -0.7126564030237086]),
            min_value: ValueSpec::Fixed(-1.0316284534898774),
            lb: VectorSpec::Fixed(&[-3.0, -2.0]),
            ub: VectorSpec::Fixed(&[3.0, 2.0]),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_six_hump_camel_known_properties() {
        assert_minimum(&six_hump_camel_function(), 2);
        let mirrored = Array1::<f64>::from(vec![-0.08984201312424386, 0.7126564030237086]);
        assert!((six_hump_camel(&mirrored).unwrap() + 1.0316284534898774).abs() < 1e-10);
    }

    #[test]
    fn test_six_hump_camel_gradient() {
        assert_gradient_matches(six_hump_camel, six_hump_camel_gradient, &[1.1, -0.3]);
    }
}
