//! Schwefel 2.22 test function

use super::prelude::*;

const NAME: &str = "schwefel_2_22";
const DIM: Dimension = Dimension::scalable(1, 2);

/// Schwefel 2.22 function - N-dimensional, unimodal, non-smooth
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
///
/// Kinks where any `x_i = 0` use the zero subgradient `sign(0) = 0`.
/// Infinite input: +∞.
pub fn schwefel_2_22<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(T::nan());
    }
    if has_inf(x) {
        return Ok(T::infinity());
    }
    let sum: T = x.iter().map(|xi| xi.abs()).sum();
    let product: T = x.iter().map(|xi| xi.abs()).product();
    Ok(sum + product)
}

/// Gradient of [`schwefel_2_22`].
pub fn schwefel_2_22_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) {
        return Ok(nan_vector(n));
    }
    if has_inf(x) {
        return Ok(filled(n, T::infinity()));
    }
    Ok(Array1::from_shape_fn(n, |i| {
        // product over j != i, without dividing by a possible zero
        let others: T = x
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, xj)| xj.abs())
            .product();
        sign(x[i]) * (T::one() + others)
    }))
}

/// Catalog record for [`schwefel_2_22`].
pub fn schwefel_2_22_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        schwefel_2_22,
        schwefel_2_22_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Sum plus product of absolute values; kinked along every axis.",
            math: r"f(\mathbf{x}) = \sum_{i=1}^{n}|x_i| + \prod_{i=1}^{n}|x_i|",
            source: "Schwefel (1981), Numerical Optimization of Computer Models",
            dimension: DIM,
            properties: &[
                Property::Unimodal,
                Property::NonSeparable,
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
    use crate::test_support::assert_gradient_matches;

    #[test]
    fn test_schwefel_2_22_known_properties() {
        let x = Array1::<f64>::from(vec![1.0, -2.0, 3.0]);
        assert_eq!(schwefel_2_22(&x).unwrap(), 12.0);
        assert_eq!(
            schwefel_2_22_gradient(&x).unwrap(),
            Array1::<f64>::from(vec![7.0, -4.0, 3.0])
        );
        let g = schwefel_2_22_gradient(&Array1::<f64>::from(vec![0.0, 5.0])).unwrap();
        assert_eq!(g, Array1::<f64>::from(vec![0.0, 1.0]));
        assert_gradient_matches(schwefel_2_22, schwefel_2_22_gradient, &[0.4, -1.5, 2.5]);
    }
}
