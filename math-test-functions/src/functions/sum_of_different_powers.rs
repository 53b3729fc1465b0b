//! Sum of different powers test function

use super::prelude::*;

const NAME: &str = "sum_of_different_powers";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Sum of different powers function - N-dimensional, unimodal, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
///
/// Infinite input: +∞.
pub fn sum_of_different_powers<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    Ok(x.iter()
        .enumerate()
        .map(|(i, &xi)| xi.abs().powi(i as i32 + 2))
        .sum())
}

/// Gradient of [`sum_of_different_powers`].
pub fn sum_of_different_powers_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        T::from_usize(i + 2) * x[i].abs().powi(i as i32 + 1) * sign(x[i])
    }))
}

/// Catalog record for [`sum_of_different_powers`].
pub fn sum_of_different_powers_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        sum_of_different_powers,
        sum_of_different_powers_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Bowl whose flatness grows with the coordinate index.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n} |x_i|^{i+1}",
            source: "Molga & Smutnicki (2005), Test functions for optimization needs",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::Convex,
                Property::Separable,
                Property::Differentiable,
                Property::Continuous,
                Property::Scalable,
                Property::Bounded,
            ],
            start: VectorSpec::Fill(0.5),
            min_position: VectorSpec::Fill(0.0),
            min_value: ValueSpec::Fixed(0.0),
            lb: VectorSpec::Fill(-1.0),
            ub: VectorSpec::Fill(1.0),
            min_value_tolerance: 1e-12,
            in_molga_smutnicki_2005: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_gradient_matches;

    #[test]
    fn test_sum_of_different_powers_known_values() {
        // 0.5^2 + 0.5^3 + 0.5^4
        let v = sum_of_different_powers(&Array1::<f64>::from(vec![0.5, -0.5, 0.5])).unwrap();
        assert_eq!(v, 0.4375);
        assert_gradient_matches(
            sum_of_different_powers,
            sum_of_different_powers_gradient,
            &[0.3, -0.7, 0.9, -0.1],
        );
    }
}
