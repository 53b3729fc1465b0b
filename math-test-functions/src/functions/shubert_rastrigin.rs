//! Shubert-Rastrigin hybrid test function

use super::prelude::*;
use super::shubert::{shubert_factor, shubert_factor_slope};
use std::f64::consts::PI;

const NAME: &str = "shubert_rastrigin";
const DIM: Dimension = Dimension::Fixed(2);

/// Shubert-Rastrigin hybrid - 2D, sum of the Shubert and Rastrigin landscapes
/// Global minimum: f(x) = -158.7390604204058 at x = (-1.41787744, -0.81305187)
/// Bounds: x_i in [-5.12, 5.12]
///
/// Infinite input: +∞, the Rastrigin bowl dominates the bounded Shubert term.
pub fn shubert_rastrigin<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let two_pi = T::lit(2.0 * PI);
    let ten = T::lit(10.0);
    let rastrigin = x
        .iter()
        .map(|&xi| xi * xi - ten * (two_pi * xi).cos() + ten)
        .sum::<T>();
    Ok(shubert_factor(x[0]) * shubert_factor(x[1]) + rastrigin)
}

/// Gradient of [`shubert_rastrigin`].
pub fn shubert_rastrigin_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let (x1, x2) = (x[0], x[1]);
    let two_pi = T::lit(2.0 * PI);
    let bowl = |xi: T| T::lit(2.0) * xi + T::lit(20.0 * PI) * (two_pi * xi).sin();
    Ok(Array1::from(vec![
        shubert_factor_slope(x1) * shubert_factor(x2) + bowl(x1),
        shubert_factor(x1) * shubert_factor_slope(x2) + bowl(x2),
    ]))
}

/// Catalog record for [`shubert_rastrigin`].
pub fn shubert_rastrigin_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        shubert_rastrigin,
        shubert_rastrigin_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Shubert product superimposed on a Rastrigin grid; breaks the Shubert symmetry.",
            math: r"f(\mathbf{x}) = \prod_{j=1}^{2} \sum_{i=1}^{5} i \cos((i + 1)x_j + i) + 20 + \sum_{j=1}^{2}\left[x_j^2 - 10\cos(2\pi x_j)\right]",
            source: "Hybrid of Shubert (1972) and Rastrigin (1974)",
            dimension: DIM,
            properties: &[
                Property::Multimodal,
                Property::NonConvex,
                Property::NonSeparable,
                Property::Differentiable,
                Property::Continuous,
                Property::Bounded,
            ],
            start: VectorSpec::Fixed(&[2.0, 2.0]),
            min_position: VectorSpec::Fixed(&[-1.4178774424749783, -0.813051868273739]),
            min_value: ValueSpec::Fixed(-158.7390604204058),
            lb: VectorSpec::Fill(-5.12),
            ub: VectorSpec::Fill(5.12),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{rastrigin, shubert};
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_shubert_rastrigin_is_the_sum_of_its_parts() {
        assert_minimum(&shubert_rastrigin_function(), 2);
        let x = Array1::<f64>::from(vec![1.3, -2.2]);
        let hybrid = shubert_rastrigin(&x).unwrap();
        let parts = shubert(&x).unwrap() + rastrigin(&x).unwrap();
        assert!((hybrid - parts).abs() < 1e-12);
    }

    #[test]
    fn test_shubert_rastrigin_gradient() {
        assert_gradient_matches(shubert_rastrigin, shubert_rastrigin_gradient, &[1.3, -2.2]);
    }
}
