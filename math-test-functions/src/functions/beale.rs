//! Beale test function

use super::prelude::*;

const NAME: &str = "beale";
const DIM: Dimension = Dimension::Fixed(2);

/// Beale function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
///
/// Infinite input: +∞.
pub fn beale<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let (a, b, c) = residuals(x[0], x[1]);
    Ok(a * a + b * b + c * c)
}

fn residuals<T: Scalar>(x1: T, x2: T) -> (T, T, T) {
    (
        T::lit(1.5) - x1 + x1 * x2,
        T::lit(2.25) - x1 + x1 * x2.powi(2),
        T::lit(2.625) - x1 + x1 * x2.powi(3),
    )
}

/// Gradient of [`beale`].
pub fn beale_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let (a, b, c) = residuals(x1, x2);
    let two = T::lit(2.0);
    let d1 = two * a * (x2 - T::one())
        + two * b * (x2.powi(2) - T::one())
        + two * c * (x2.powi(3) - T::one());
    let d2 = two * a * x1 + T::lit(4.0) * b * x1 * x2 + T::lit(6.0) * c * x1 * x2.powi(2);
    Ok(Array1::from(vec![d1, d2]))
}

/// Catalog record for [`beale`].
pub fn beale_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        beale,
        beale_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Sharp peaks at the corners of the domain around a flat valley.",
            math: r"f(\mathbf{x}) = (1.5 - x_1 + x_1 x_2)^2 + (2.25 - x_1 + x_1 x_2^2)^2 + (2.625 - x_1 + x_1 x_2^3)^2",
            source: "Beale (1958), On an iterative method for finding a local minimum of a function of more than one variable",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 1.0]),
            min_position: VectorSpec::Fixed(&[3.0, 0.5]),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-4.5),
            ub: VectorSpec::Fill(4.5),
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
    fn test_beale_known_properties() {
        assert_minimum(&beale_function(), 2);
        let g = beale_gradient(&Array1::<f64>::from(vec![3.0, 0.5])).unwrap();
        assert!(g.iter().all(|gi| gi.abs() < 1e-12));
        // (1.5)^2 + (2.25)^2 + (2.625)^2
        assert!((beale(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap() - 14.203125).abs() < 1e-12);
    }

    #[test]
    fn test_beale_gradient() {
        assert_gradient_matches(beale, beale_gradient, &[1.0, 1.0]);
        assert_gradient_matches(beale, beale_gradient, &[-2.3, 0.7]);
    }
}
