//! HappyCat test function

use super::prelude::*;

const NAME: &str = "happy_cat";
const DIM: Dimension = Dimension::scalable(1, 2);

const ALPHA: f64 = 0.125;

/// HappyCat function - N-dimensional, multimodal, cusp along the sphere ||x||^2 = n
/// Global minimum: f(x) = 0 at x = (-1, -1, ..., -1)
/// Bounds: x_i in [-2, 2]
///
/// With alpha = 1/8 the first term is |‖x‖² - n|^(1/4). Its derivative is
/// unbounded on the sphere ‖x‖² = n, which contains the minimizer, so the
/// gradient is NaN there.
/// Infinite input: +∞.
pub fn happy_cat<T: Scalar>(x: &Array1<T>) -> Result<T> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let n_t = T::from_usize(n);
    let sum_sq: T = x.iter().map(|&xi| xi * xi).sum();
    let sum: T = x.iter().copied().sum();
    let cusp = (sum_sq - n_t).abs().powf(T::lit(2.0 * ALPHA));
    Ok(cusp + (T::lit(0.5) * sum_sq + sum) / n_t + T::lit(0.5))
}

/// Gradient of [`happy_cat`].
pub fn happy_cat_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let n_t = T::from_usize(n);
    let sum_sq: T = x.iter().map(|&xi| xi * xi).sum();
    let u = sum_sq - n_t;
    if u == T::zero() {
        return Ok(nan_vector(n));
    }
    // d/du |u|^(2a) = 2a |u|^(2a - 1) sign(u), times du/dx_i = 2 x_i
    let slope = T::lit(2.0 * ALPHA) * u.abs().powf(T::lit(2.0 * ALPHA - 1.0)) * sign(u);
    Ok(x.mapv(|xi| slope * T::lit(2.0) * xi + (xi + T::one()) / n_t))
}

/// Catalog record for [`happy_cat`].
pub fn happy_cat_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        happy_cat,
        happy_cat_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Groove along the sphere of radius sqrt(n) with the minimum at (-1, ..., -1).",
            math: r"f(\mathbf{x}) = \left[\left(\|\mathbf{x}\|^2 - n\right)^2\right]^{\alpha} + \frac{1}{n}\left(\tfrac{1}{2}\|\mathbf{x}\|^2 + \sum_{i=1}^{n}x_i\right) + \tfrac{1}{2}",
            source: "Beyer & Finck (2012), HappyCat - a simple function class where well-known direct search algorithms do fail",
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
            start: VectorSpec::Fill(0.5),
            min_position: VectorSpec::Fill(-1.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-2.0),
            ub: VectorSpec::Fill(2.0),
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
    fn test_happy_cat_known_values() {
        let f = happy_cat_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        let v = happy_cat(&Array1::<f64>::from(vec![0.0, 0.0])).unwrap();
        assert_relative_eq!(v, 2.0_f64.powf(0.25) + 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_happy_cat_gradient_on_the_cusp_is_nan() {
        let g = happy_cat_gradient(&Array1::<f64>::from(vec![-1.0, -1.0])).unwrap();
        assert!(g.iter().all(|v| v.is_nan()));
        assert_gradient_matches(happy_cat, happy_cat_gradient, &[0.2, -0.7, 1.3]);
    }
}
