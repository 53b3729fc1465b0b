//! Michalewicz test function

use super::prelude::*;
use std::f64::consts::PI;

const NAME: &str = "michalewicz";
const DIM: Dimension = Dimension::Fixed(2);

/// Steepness of the valleys.
const M: i32 = 10;

/// Michalewicz function - 2D multimodal, steep valleys and ridges
/// Global minimum: f(x) = -1.8013034100985534 at x = (2.20290552, 1.57079633)
/// Bounds: x_i in [0, π]
///
/// Infinite input: NaN, the oscillation has no limit.
pub fn michalewicz<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    let total: T = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| xi.sin() * phase(i, xi).sin().powi(2 * M))
        .sum();
    Ok(-total)
}

/// `(i + 1) x_i^2 / pi`
fn phase<T: Scalar>(i: usize, xi: T) -> T {
    T::from_usize(i + 1) * xi * xi / T::lit(PI)
}

/// Gradient of [`michalewicz`].
pub fn michalewicz_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let two_m = T::lit(f64::from(2 * M));
    let grad = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| {
            let theta = phase(i, xi);
            let (s, c) = (theta.sin(), theta.cos());
            let dtheta = T::lit(2.0) * T::from_usize(i + 1) * xi / T::lit(PI);
            -(xi.cos() * s.powi(2 * M) + xi.sin() * two_m * s.powi(2 * M - 1) * c * dtheta)
        })
        .collect::<Vec<T>>();
    Ok(Array1::from(grad))
}

/// Catalog record for [`michalewicz`].
pub fn michalewicz_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        michalewicz,
        michalewicz_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Flat plateaus cut by steep valleys whose width shrinks with m = 10.",
            math: r"f(\mathbf{x}) = -\sum_{i=1}^{2} \sin x_i \sin^{2m}\left(\frac{i x_i^2}{\pi}\right), \quad m = 10",
            source: "Michalewicz (1992), Genetic Algorithms + Data Structures = Evolution Programs",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[1.0, 1.0]),
            min_position: VectorSpec::Fixed(&[2.202905522993926, 1.570796328511059]),
            min_value: ValueSpec::Fixed(-1.8013034100985534),
            lb: VectorSpec::Fill(0.0),
            ub: VectorSpec::Fill(PI),
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
    fn test_michalewicz_known_properties() {
        assert_minimum(&michalewicz_function(), 2);
        assert_eq!(michalewicz(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap(), 0.0);
    }

    #[test]
    fn test_michalewicz_gradient() {
        assert_gradient_matches(michalewicz, michalewicz_gradient, &[2.1, 1.4]);
    }
}
