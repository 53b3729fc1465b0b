//! Griewank test function

use super::prelude::*;

const NAME: &str = "griewank";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Griewank function - N-dimensional, multimodal, product-coupled
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
///
/// Infinite input: +∞, the quadratic term dominates.
pub fn griewank<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let sum_sq: T = x.iter().map(|&xi| xi * xi).sum();
    let prod: T = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / T::from_usize(i + 1).sqrt()).cos())
        .product();
    Ok(T::one() + sum_sq / T::lit(4000.0) - prod)
}

/// Gradient of [`griewank`].
pub fn griewank_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    let scale = |i: usize| T::from_usize(i + 1).sqrt();
    Ok(Array1::from_shape_fn(n, |i| {
        // product over the other coordinates, no division by a zero cosine
        let others: T = x
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, &xj)| (xj / scale(j)).cos())
            .product();
        x[i] / T::lit(2000.0) + (x[i] / scale(i)).sin() / scale(i) * others
    }))
}

/// Catalog record for [`griewank`].
pub fn griewank_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        griewank,
        griewank_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Wide bowl with a product of cosines superimposed; local minima thin out as n grows.",
            math: r"f(\mathbf{x}) = 1 + \frac{1}{4000}\sum_{i=1}^{n} x_i^2 - \prod_{i=1}^{n}\cos\left(\frac{x_i}{\sqrt{i}}\right)",
            source: "Griewank (1981), Generalized descent for global optimization",
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
            start: VectorSpec::Fill(10.0),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-600.0),
            ub: VectorSpec::Fill(600.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};
    use approx::assert_relative_eq;

    #[test]
    fn test_griewank_known_values() {
        let f = griewank_function::<f64>();
        for n in [1, 2, 10] {
            assert_minimum(&f, n);
        }
        let v = griewank(&Array1::<f64>::from(vec![1.0, 2.0])).unwrap();
        assert_relative_eq!(v, 0.9169932621326707, epsilon = 1e-12);
    }

    #[test]
    fn test_griewank_gradient() {
        assert_gradient_matches(griewank, griewank_gradient, &[3.0, -7.5, 12.0]);
        // cos(x_1) = 0 must not poison the other partials
        let x = [std::f64::consts::FRAC_PI_2, 1.0];
        assert_gradient_matches(griewank, griewank_gradient, &x);
    }
}
