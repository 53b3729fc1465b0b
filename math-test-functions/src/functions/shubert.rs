//! Shubert test function

use super::prelude::*;

const NAME: &str = "shubert";
const DIM: Dimension = Dimension::Fixed(2);

/// One factor of the Shubert product: `sum_{i=1}^{5} i cos((i + 1) t + i)`.
pub(crate) fn shubert_factor<T: Scalar>(t: T) -> T {
    (1..=5)
        .map(|i| {
            let i = T::from_usize(i);
            i * ((i + T::one()) * t + i).cos()
        })
        .sum()
}

/// Derivative of [`shubert_factor`].
pub(crate) fn shubert_factor_slope<T: Scalar>(t: T) -> T {
    (1..=5)
        .map(|i| {
            let i = T::from_usize(i);
            -i * (i + T::one()) * ((i + T::one()) * t + i).sin()
        })
        .sum()
}

/// Shubert function - 2D, 760 local minima of which 18 are global
/// Global minimum: f(x) = -186.73090883102392 at x = (-7.08350641, 4.85805688)
/// Bounds: x_i in [-10, 10]
///
/// Infinite input: NaN, the oscillation has no limit.
pub fn shubert<T: Scalar>(x: &Array1<T>) -> Result<T> {
    check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(T::nan());
    }
    Ok(shubert_factor(x[0]) * shubert_factor(x[1]))
}

/// Gradient of [`shubert`].
pub fn shubert_gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
    let n = check_input(NAME, DIM, x)?;
    if has_nan(x) || has_inf(x) {
        return Ok(nan_vector(n));
    }
    let (x1, x2) = (x[0], x[1]);
    Ok(Array1::from(vec![
        shubert_factor_slope(x1) * shubert_factor(x2),
        shubert_factor(x1) * shubert_factor_slope(x2),
    ]))
}

/// Catalog record for [`shubert`].
pub fn shubert_function<T: Scalar>() -> TestFunction<T> {
    make_test_function(
        shubert,
        shubert_gradient,
        FunctionMetadata {
            name: NAME,
            description: "Product of two trigonometric sums with many equal global minima.",
            math: r"f(\mathbf{x}) = \prod_{j=1}^{2} \sum_{i=1}^{5} i \cos((i + 1)x_j + i)",
            source: "Shubert (1972), A sequential method seeking the global maximum of a function",
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
            min_position: VectorSpec::Fixed(&[-7.083506407714322, 4.8580568769524834]),
            min_value: ValueSpec::Fixed(-186.73090883102392),
            lb: VectorSpec::Fill(-10.0),
            ub: VectorSpec::Fill(10.0),
            min_value_tolerance: 1e-10,
            in_molga_smutnicki_2005: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_gradient_matches, assert_minimum};

    #[test]
    fn test_shubert_known_properties() {
        assert_minimum(&shubert_function(), 2);
        // the product is symmetric in its arguments
        let a = shubert(&Array1::<f64>::from(vec![-7.083506407714322, 4.8580568769524834])).unwrap();
        let b = shubert(&Array1::<f64>::from(vec![4.8580568769524834, -7.083506407714322])).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_shubert_gradient() {
        assert_gradient_matches(shubert, shubert_gradient, &[0.3, -1.7]);
    }
}
